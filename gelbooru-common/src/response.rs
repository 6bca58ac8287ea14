//! Response envelopes of the `dapi` listing endpoints.
//!
//! Both listings wrap their items in an object that also carries pagination data:
//!
//! ```json
//! { "@attributes": { "limit": 100, "offset": 0, "count": 1234 }, "post": [ ... ] }
//! ```
//!
//! Decoding is all-or-nothing: the first element that fails to map fails the whole envelope.
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use crate::{error::DecodeError, fields::Fields, post::Post, tag::Tag};

const ATTRIBUTES_KEY: &str = "@attributes";

/// Pagination data sent along with every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageAttributes {
    /// Total number of items matching the query
    pub count: u64,
    /// Page index, when the server echoes it back
    pub pid: Option<u64>,
    pub limit: u64,
}

impl PageAttributes {
    fn from_fields(f: &Fields<'_>) -> Result<Self, DecodeError> {
        let attrs = f.object(ATTRIBUTES_KEY)?;
        let nest = |e: DecodeError| e.within(ATTRIBUTES_KEY);

        Ok(Self {
            count: attrs.unsigned("count").map_err(nest)?,
            pid: attrs.optional_unsigned("pid").map_err(nest)?,
            limit: attrs.unsigned("limit").map_err(nest)?,
        })
    }
}

/// A decoded page of posts.
#[derive(Debug, Clone)]
pub struct PostList {
    pub attributes: PageAttributes,
    /// Posts in the order the server sent them
    pub posts: Vec<Post>,
}

impl PostList {
    /// Maps the whole envelope.
    ///
    /// Gelbooru leaves the `post` array out when a search has no results, so an absent array
    /// decodes as an empty page instead of a missing field. A `post` key of any other type is
    /// still a type mismatch.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let start = Instant::now();
        let f = Fields::new(value)?;
        let attributes = PageAttributes::from_fields(&f)?;

        let posts = f
            .optional_array("post")?
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                Post::from_json(raw).map_err(|e| e.within(&format!("post[{idx}]")))
            })
            .collect::<Result<Vec<Post>, DecodeError>>()?;

        debug!("List size: {}", posts.len());
        debug!("Post mapping took {:?}", start.elapsed());

        Ok(Self { attributes, posts })
    }
}

/// A decoded page of tags.
#[derive(Debug, Clone)]
pub struct TagList {
    pub attributes: PageAttributes,
    /// `None` when the server left the `tag` array out, which it does for empty pages.
    pub tags: Option<Vec<Tag>>,
}

impl TagList {
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        let f = Fields::new(value)?;
        let attributes = PageAttributes::from_fields(&f)?;

        let tags = f
            .optional_array("tag")?
            .map(|list| {
                list.iter()
                    .enumerate()
                    .map(|(idx, raw)| {
                        Tag::from_json(raw).map_err(|e| e.within(&format!("tag[{idx}]")))
                    })
                    .collect::<Result<Vec<Tag>, DecodeError>>()
            })
            .transpose()?;

        debug!("Tag list size: {:?}", tags.as_ref().map(Vec::len));

        Ok(Self { attributes, tags })
    }
}

/// Parses and maps a raw post listing body.
pub fn decode_post_list(body: &str) -> Result<PostList, DecodeError> {
    let value = serde_json::from_str::<Value>(body)?;
    PostList::from_json(&value)
}

/// Parses and maps a raw tag listing body.
pub fn decode_tag_list(body: &str) -> Result<TagList, DecodeError> {
    let value = serde_json::from_str::<Value>(body)?;
    TagList::from_json(&value)
}
