//! Content rating attached to every post
//! # Post Rating
//! Gelbooru classifies posts into 4 ratings, from least to most explicit:
//! * `general`: Posts that don't involve anything suggestive. Usually normal fanart.
//! * `sensitive`: Mildly suggestive posts that are still fine to look at in most places.
//! * `questionable`: Posts with nudity or other suggestive content that *might* not be safe for viewing at work.
//! * `explicit`: Posts that are explicitly pornographic or have other sensitive content such as gore, etc.
//!
//! Older responses (and older clients) also used a `safe` rating. It is not accepted here; a post
//! carrying it fails to decode with [`DecodeError::InvalidEnumValue`].

use serde::Serialize;
use std::{fmt::Display, str::FromStr};

use crate::error::DecodeError;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    /// Represents posts that don't involve anything suggestive or sensitive.
    General,
    /// Represents posts that are mildly suggestive.
    Sensitive,
    /// Represents posts that have some degree of nudity or sexually suggestive elements.
    Questionable,
    /// Represents posts that have explicit elements of pornography, gore, death, etc.
    Explicit,
}

impl Rating {
    /// Every rating, in the order the API documents them.
    pub const ALL: [Self; 4] = [
        Self::General,
        Self::Sensitive,
        Self::Questionable,
        Self::Explicit,
    ];

    /// The literal used by the API and by `rating:` search tags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Sensitive => "sensitive",
            Self::Questionable => "questionable",
            Self::Explicit => "explicit",
        }
    }

    /// Search tag that removes posts with this rating from the results, e.g. `-rating:explicit`.
    #[must_use]
    pub fn exclusion_tag(self) -> String {
        format!("-rating:{}", self.as_str())
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Sensitive => write!(f, "Sensitive"),
            Self::Questionable => write!(f, "Questionable"),
            Self::Explicit => write!(f, "Explicit"),
        }
    }
}

impl FromStr for Rating {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DecodeError::InvalidEnumValue {
                field: String::from("rating"),
                value: s.to_string(),
            })
    }
}
