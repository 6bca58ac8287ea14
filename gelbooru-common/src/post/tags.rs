//! # Post Tags
//!
//! Gelbooru sends the tags of a post as one string, separated by single spaces. Posts keep them
//! as a [`TagSet`], which is also what search queries take as input.
use ahash::AHashSet;

/// Unordered set of tag names.
pub type TagSet = AHashSet<String>;

/// Splits the API's space-delimited tag string into a set.
///
/// Runs of spaces never produce an empty tag.
pub fn split_tags(raw: &str) -> TagSet {
    raw.split(' ')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
