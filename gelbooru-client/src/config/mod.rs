//! Server settings and API credentials.
//!
//! A [`ServerConfig`] describes where and how requests are sent; [`Credentials`] are the two
//! opaque strings the API wants on every request. The credentials and parts of the server
//! settings can be loaded from a TOML file, see [`serialize`].
use gelbooru_common::serde::{self, Deserialize};
use std::{fmt::Display, io, path::PathBuf, time::Duration};
use thiserror::Error;

pub mod serialize;

pub(crate) const DEFAULT_UA: &str = concat!("Rust Gelbooru Client/", env!("CARGO_PKG_VERSION"));

/// Largest page size the `dapi` listings accept.
pub const MAX_PAGE_LIMIT: u16 = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    ConfigIOError { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub pretty_name: String,
    /// Endpoint of the `dapi`, without query string
    pub api_url: String,
    pub user_agent: String,
    /// Page size cap. Values above [`MAX_PAGE_LIMIT`] have no effect.
    pub max_post_limit: u16,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: String::from("gelbooru"),
            pretty_name: String::from("Gelbooru"),
            api_url: String::from("https://gelbooru.com/index.php"),
            user_agent: DEFAULT_UA.to_string(),
            max_post_limit: MAX_PAGE_LIMIT,
            timeout_secs: 30,
        }
    }
}

impl Display for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl ServerConfig {
    #[inline]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// API key and user id, passed through untouched as query parameters.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(crate = "self::serde")]
pub struct Credentials {
    pub api_key: String,
    pub user_id: String,
}

impl Credentials {
    #[must_use]
    pub fn new(api_key: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_id: user_id.into(),
        }
    }
}

// Keeps the key out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}
