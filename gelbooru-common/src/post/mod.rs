//! Main representation of a Gelbooru post
//!
//! # Post
//! A [`Post` struct](Post) holds every field the `dapi` post listing returns, already normalized:
//! tags are a set, and the fields Gelbooru fills with `"false"` or `""` when they have no value
//! become `None`.
use serde::Serialize;
use serde_json::Value;

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
};

use crate::{error::DecodeError, fields::Fields, IMAGE_HOST, SITE_URL};

use self::{
    rating::Rating,
    tags::{split_tags, TagSet},
};

pub mod rating;
pub mod tags;

/// One image post as returned by the post listing.
///
/// Two posts are equal when they have the same `id`, whatever the other fields say.
#[derive(Clone, Serialize)]
pub struct Post {
    /// ID number of the post given by the imageboard
    pub id: u64,
    pub created_at: String,
    pub score: i64,
    pub width: u32,
    pub height: u32,
    pub md5: String,
    /// Storage directory of the file, e.g. `4a/81`
    pub directory: String,
    /// File name of the original image inside `directory`
    pub image: String,
    pub rating: Rating,
    pub source: String,
    pub change: u64,
    pub owner: String,
    pub creator_id: u64,
    /// `0` when the post has no parent
    pub parent_id: u64,
    pub sample: u8,
    pub preview_height: u32,
    pub preview_width: u32,
    pub tags: TagSet,
    pub title: Option<String>,
    pub has_notes: Option<String>,
    pub has_comments: Option<String>,
    /// Direct URL of the original file, as given by the API
    pub file_url: String,
    pub preview_url: String,
    /// Only present when the server generated a resized sample
    pub sample_url: Option<String>,
    pub sample_height: u32,
    pub sample_width: u32,
    pub status: Option<String>,
    pub post_locked: u8,
    pub has_children: Option<String>,
}

impl Debug for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Post")
            .field("Post ID", &self.id)
            .field("File URL", &self.file_url)
            .field("MD5 Hash", &self.md5)
            .field("Rating", &self.rating)
            .field("Score", &self.score)
            .field("Tag List", &self.tags)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Ord for Post {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Post {
    /// Maps one element of the `post` array.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::new(value)?;

        Ok(Self {
            id: f.unsigned("id")?,
            created_at: f.string("created_at")?.to_string(),
            score: f.signed("score")?,
            width: f.unsigned("width")?,
            height: f.unsigned("height")?,
            md5: f.string("md5")?.to_string(),
            directory: f.string("directory")?.to_string(),
            image: f.string("image")?.to_string(),
            rating: f.string("rating")?.parse()?,
            source: f.string("source")?.to_string(),
            change: f.unsigned("change")?,
            owner: f.string("owner")?.to_string(),
            creator_id: f.unsigned("creator_id")?,
            parent_id: f.unsigned("parent_id")?,
            sample: f.unsigned("sample")?,
            preview_height: f.unsigned("preview_height")?,
            preview_width: f.unsigned("preview_width")?,
            tags: split_tags(f.string("tags")?),
            title: f.optional_string("title")?.map(str::to_string),
            has_notes: false_as_none(f.string("has_notes")?),
            has_comments: false_as_none(f.string("has_comments")?),
            file_url: f.string("file_url")?.to_string(),
            preview_url: f.string("preview_url")?.to_string(),
            sample_url: empty_as_none(f.string("sample_url")?),
            sample_height: f.unsigned("sample_height")?,
            sample_width: f.unsigned("sample_width")?,
            status: f.optional_string("status")?.map(str::to_string),
            post_locked: f.unsigned("post_locked")?,
            has_children: false_as_none(f.string("has_children")?),
        })
    }

    /// Minimal post for previews and default states.
    ///
    /// Everything besides the arguments is zeroed, empty or `None`.
    pub fn placeholder(id: u64, tags: TagSet, file_url: &str, rating: Rating) -> Self {
        Self {
            id,
            created_at: String::new(),
            score: 0,
            width: 0,
            height: 0,
            md5: String::new(),
            directory: String::new(),
            image: String::new(),
            rating,
            source: String::new(),
            change: 0,
            owner: String::new(),
            creator_id: 0,
            parent_id: 0,
            sample: 0,
            preview_height: 0,
            preview_width: 0,
            tags,
            title: None,
            has_notes: None,
            has_comments: None,
            file_url: file_url.to_string(),
            preview_url: String::new(),
            sample_url: None,
            sample_height: 0,
            sample_width: 0,
            status: None,
            post_locked: 0,
            has_children: None,
        }
    }

    /// Browser URL of the post page.
    #[inline]
    pub fn url(&self) -> String {
        format!("{SITE_URL}/index.php?page=post&s=view&id={}", self.id)
    }

    /// URL of the original file, built from `directory` and `image`.
    #[inline]
    pub fn image_url(&self) -> String {
        format!("{IMAGE_HOST}/images/{}/{}", self.directory, self.image)
    }

    /// URL of the thumbnail, built from `directory` and `image`.
    #[inline]
    pub fn preview_image_url(&self) -> String {
        format!(
            "{IMAGE_HOST}/thumbnails/{}/thumbnail_{}",
            self.directory, self.image
        )
    }
}

fn false_as_none(raw: &str) -> Option<String> {
    (raw != "false").then(|| raw.to_string())
}

fn empty_as_none(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}
