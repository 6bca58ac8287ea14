use clap::Args;
use gelbooru_client::{client::GelbooruClient, prelude::DEFAULT_LIMIT, transport::Transport};
use gelbooru_common::{ahash::AHashSet, tag::Tag};
use log::debug;
use std::time::Duration;
use tokio::time::sleep;

use crate::{cli::output::print_tags, error::CliError};

#[derive(Debug, Args)]
pub struct TagCatalog {
    /// Number of tags per page
    ///
    /// [max: 100]
    #[clap(short, long, default_value_t = DEFAULT_LIMIT, help_heading = "PAGING")]
    pub limit: u16,

    /// Zero-based page to fetch, or to start from with --all
    #[clap(short, long, default_value_t = 0, help_heading = "PAGING")]
    pub page: u32,

    /// Keep fetching pages until the catalog runs out
    #[clap(long, action, default_value_t = false, help_heading = "PAGING")]
    pub all: bool,

    /// Stop after this many pages when using --all
    #[clap(long, value_name = "PAGES", requires = "all", help_heading = "PAGING")]
    pub max_pages: Option<u32>,

    /// Wait this long between pages when using --all
    #[clap(long, value_name = "MILLIS", default_value_t = 500, help_heading = "PAGING")]
    pub delay_ms: u64,
}

impl TagCatalog {
    pub async fn run<T: Transport>(
        &self,
        client: &GelbooruClient<T>,
        json: bool,
    ) -> Result<(), CliError> {
        let tags = if self.all {
            self.crawl(client).await?
        } else {
            client
                .list_tags(self.limit, self.page)
                .await?
                .unwrap_or_default()
        };

        print_tags(&tags, json)
    }

    /// Walks the catalog page by page starting at `self.page`.
    ///
    /// Stops at the first page without tags or after `max_pages`. Tags already seen on an
    /// earlier page are skipped.
    pub async fn crawl<T: Transport>(
        &self,
        client: &GelbooruClient<T>,
    ) -> Result<Vec<Tag>, CliError> {
        let mut seen: AHashSet<u64> = AHashSet::new();
        let mut tags = Vec::new();
        let mut page = self.page;
        let mut fetched = 0;

        loop {
            if self.max_pages.is_some_and(|max| fetched >= max) {
                debug!("Reached page cap of {fetched}");
                break;
            }

            let batch = client
                .list_tags(self.limit, page)
                .await
                .map_err(|source| CliError::PageFetchFail { page, source })?;
            fetched += 1;

            let Some(batch) = batch.filter(|b| !b.is_empty()) else {
                debug!("Tag page {page} is empty. Stopping");
                break;
            };

            let before = tags.len();
            tags.extend(batch.into_iter().filter(|tag| seen.insert(tag.id)));
            debug!("Page {page}: {} new tags", tags.len() - before);

            page += 1;

            if self.delay_ms > 0 {
                debug!("Debouncing API calls by {} ms", self.delay_ms);
                sleep(Duration::from_millis(self.delay_ms)).await;
            }
        }

        Ok(tags)
    }
}
