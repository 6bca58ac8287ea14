use std::ops::Deref;

use clap::ValueEnum;
use gelbooru_common::post::rating::Rating;

pub mod cli;
pub mod error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct RatingArg(pub Rating);

impl ValueEnum for RatingArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self(Rating::General),
            Self(Rating::Sensitive),
            Self(Rating::Questionable),
            Self(Rating::Explicit),
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        let help = match self.0 {
            Rating::General => "Posts that don't involve anything suggestive or sensitive",
            Rating::Sensitive => "Posts that are mildly suggestive",
            Rating::Questionable => {
                "Posts that have some degree of nudity or sexually suggestive elements"
            }
            Rating::Explicit => "Posts that have explicit elements of pornography, gore, death, etc",
        };

        Some(clap::builder::PossibleValue::new(self.0.as_str()).help(help))
    }
}

impl Deref for RatingArg {
    type Target = Rating;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
