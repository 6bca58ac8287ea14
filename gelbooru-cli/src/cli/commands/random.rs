use clap::Args;
use gelbooru_client::{client::GelbooruClient, transport::Transport};
use gelbooru_common::post::tags::TagSet;

use crate::{cli::output::print_posts, error::CliError, RatingArg};

#[derive(Debug, Args)]
pub struct RandomPost {
    /// Tags the post must match
    #[clap(value_parser)]
    pub tags: Vec<String>,

    /// Leave out posts with this rating. Can be used multiple times
    #[clap(short = 'x', long, value_parser, help_heading = "GENERAL")]
    pub exclude_rating: Vec<RatingArg>,
}

impl RandomPost {
    pub async fn run<T: Transport>(
        &self,
        client: &GelbooruClient<T>,
        json: bool,
    ) -> Result<(), CliError> {
        let mut tags: TagSet = self.tags.iter().cloned().collect();
        tags.extend(self.exclude_rating.iter().map(|r| r.exclusion_tag()));

        let post = client.random_post(&tags).await?;

        print_posts(post.as_slice(), json)
    }
}
