use gelbooru_client::{config::ConfigError, error::ClientError};
use gelbooru_common::serde_json;
use thiserror::Error;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Request to imageboard failed: {source}")]
    ClientFail {
        #[from]
        source: ClientError,
    },

    /// Paging stopped at `page`. Passing it back through `--page` resumes from there.
    #[error("Failed to fetch tag page {page}: {source}")]
    PageFetchFail { page: u32, source: ClientError },

    #[error("Failed to load config: {source}")]
    ConfigFail {
        #[from]
        source: ConfigError,
    },

    #[error("Failed to serialize output: {source}")]
    SerializeFail {
        #[from]
        source: serde_json::Error,
    },
}
