//! # Tag Records
//!
//! Entries of the tag listing endpoint. Names may carry a category annotation such as
//! `hair_(ornament)` or `saber_(fate)`; [`Tag::name_without_category`] and [`Tag::category`]
//! split it off.
use serde::Serialize;
use serde_json::Value;
use std::{
    borrow::Cow,
    hash::{Hash, Hasher},
};

use crate::{error::DecodeError, fields::Fields, post::tags::TagSet};

/// A named, countable classification token.
///
/// Equality and hashing only look at `id`, so a set of tags deduplicates by id.
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    /// Number of posts using this tag
    pub count: u64,
    /// Raw category code given by the API (0 general, 1 artist, 3 copyright, 4 character, 5 metadata)
    #[serde(rename = "type")]
    pub tag_type: i64,
    pub ambiguous: i64,
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Tag {
    /// Maps one element of the `tag` array.
    ///
    /// A name containing a space is rejected, since it could not round trip through a search query.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::new(value)?;

        let name = f.string("name")?;
        if name.contains(' ') {
            return Err(DecodeError::TypeMismatch {
                field: "name".to_string(),
                expected: "tag name without spaces",
            });
        }

        Ok(Self {
            id: f.unsigned("id")?,
            name: name.to_string(),
            count: f.unsigned("count")?,
            tag_type: f.signed("type")?,
            ambiguous: f.signed("ambiguous")?,
        })
    }

    /// The name with its `_(...)` annotation removed: `hair_(ornament)` becomes `hair`.
    pub fn name_without_category(&self) -> Cow<'_, str> {
        match category_span(&self.name) {
            Some((start, end)) => {
                Cow::Owned(format!("{}{}", &self.name[..start], &self.name[end..]))
            }
            None => Cow::Borrowed(&self.name),
        }
    }

    /// The `_(...)` annotation itself, underscore and parentheses included.
    pub fn category(&self) -> Option<&str> {
        category_span(&self.name).map(|(start, end)| &self.name[start..end])
    }
}

/// Byte range of the annotation: from the first `_(` up to the last `)` after it.
fn category_span(name: &str) -> Option<(usize, usize)> {
    let start = name.find("_(")?;
    let close = name.rfind(')')?;

    (close > start + 1).then_some((start, close + 1))
}

/// Collects the names of a tag page, e.g. to turn it into a search selection.
pub fn tag_names(tags: &[Tag]) -> TagSet {
    tags.iter().map(|tag| tag.name.clone()).collect()
}
