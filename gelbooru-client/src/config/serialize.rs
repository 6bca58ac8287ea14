//! TOML config file handling
//!
//! The file lives in `$XDG_CONFIG_HOME/gelbooru-client/config.toml` on Linux (or the platform
//! equivalent), or wherever the env var `GELBOORU_CONFIG` points to.
//!
//! ```toml
//! [credentials]
//! api_key = "..."
//! user_id = "..."
//!
//! [server]
//! timeout_secs = 10
//! ```
use directories::ProjectDirs;
use gelbooru_common::{
    log::debug,
    serde::{self, Deserialize},
};
use std::{
    env,
    fs::{self, read_to_string},
    path::{Path, PathBuf},
};

use super::{ConfigError, Credentials, ServerConfig};

pub const SAMPLE_CONFIG_TOML: &str = include_str!("sample.toml");

/// Contents of the config file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "self::serde")]
pub struct FileConfig {
    pub credentials: Option<Credentials>,
    #[serde(default)]
    pub server: ServerOverrides,
}

/// Fields of [`ServerConfig`] that the file may override.
#[derive(Debug, Default, Deserialize)]
#[serde(crate = "self::serde")]
pub struct ServerOverrides {
    pub api_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Applies the `[server]` section on top of `base`.
    pub fn server_config(&self, base: ServerConfig) -> ServerConfig {
        let ovr = &self.server;
        ServerConfig {
            api_url: ovr.api_url.clone().unwrap_or(base.api_url),
            user_agent: ovr.user_agent.clone().unwrap_or(base.user_agent),
            timeout_secs: ovr.timeout_secs.unwrap_or(base.timeout_secs),
            ..base
        }
    }
}

/// Returns the path of the config file, honoring `GELBOORU_CONFIG`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var("GELBOORU_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let cdir = ProjectDirs::from("com", "gelbooru-client", "gelbooru-client")
        .ok_or(ConfigError::NoConfigDir)?;

    Ok(cdir.config_dir().join("config.toml"))
}

/// Reads the config file at `path`. A missing file is the same as an empty one.
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(FileConfig::default());
    }

    let contents = read_to_string(path).map_err(|source| ConfigError::ConfigIOError {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<FileConfig, ConfigError> {
    let config: FileConfig = toml::from_str(contents)?;

    debug!("Loaded config: {:?}", config);
    Ok(config)
}

/// Writes the commented sample config to `path` unless a file is already there.
///
/// Returns whether a new file was created.
pub fn write_sample_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    let io_err = |source: std::io::Error| ConfigError::ConfigIOError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, SAMPLE_CONFIG_TOML).map_err(io_err)?;

    Ok(true)
}
