use clap::Args;
use gelbooru_client::{client::GelbooruClient, prelude::DEFAULT_LIMIT, transport::Transport};
use gelbooru_common::post::tags::TagSet;
use log::debug;

use crate::{cli::output::print_posts, error::CliError, RatingArg};

#[derive(Debug, Args)]
pub struct PostSearch {
    /// Tags to search
    #[clap(value_parser)]
    pub tags: Vec<String>,

    /// Number of posts per page
    ///
    /// [max: 100]
    #[clap(short, long, default_value_t = DEFAULT_LIMIT, help_heading = "PAGING")]
    pub limit: u16,

    /// Zero-based page to fetch
    #[clap(short, long, default_value_t = 0, help_heading = "PAGING")]
    pub page: u32,

    /// Leave out posts with this rating. Can be used multiple times
    #[clap(short = 'x', long, value_parser, help_heading = "GENERAL")]
    pub exclude_rating: Vec<RatingArg>,
}

impl PostSearch {
    /// The search tags plus one `-rating:` tag per excluded rating.
    pub fn query_tags(&self) -> TagSet {
        let mut tags: TagSet = self.tags.iter().cloned().collect();
        tags.extend(self.exclude_rating.iter().map(|r| r.exclusion_tag()));

        debug!("Query tags: {:?}", tags);
        tags
    }

    pub async fn run<T: Transport>(
        &self,
        client: &GelbooruClient<T>,
        json: bool,
    ) -> Result<(), CliError> {
        let posts = client
            .list_posts(&self.query_tags(), self.limit, self.page)
            .await?;

        print_posts(&posts, json)
    }
}

#[cfg(test)]
mod test {
    use gelbooru_common::post::rating::Rating;

    use super::*;

    #[test]
    fn exclusions_become_tags() {
        let search = PostSearch {
            tags: vec!["kagamine_rin".to_string(), "1girl".to_string()],
            limit: DEFAULT_LIMIT,
            page: 0,
            exclude_rating: vec![RatingArg(Rating::Explicit), RatingArg(Rating::Questionable)],
        };

        let tags = search.query_tags();

        assert_eq!(tags.len(), 4);
        assert!(tags.contains("-rating:explicit"));
        assert!(tags.contains("-rating:questionable"));
        assert!(tags.contains("kagamine_rin"));
    }
}
