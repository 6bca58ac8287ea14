use clap::{Parser, Subcommand};
use gelbooru_client::{
    client::GelbooruClient,
    config::{
        serialize::{default_config_path, read_config_file},
        Credentials, ServerConfig,
    },
};
use log::{debug, warn};
use std::path::PathBuf;

use self::commands::{config::ConfigCmd, posts::PostSearch, random::RandomPost, tags::TagCatalog};
use crate::error::CliError;

pub mod commands;
pub mod output;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search posts with tags
    Posts(PostSearch),
    /// Browse the tag catalog
    Tags(TagCatalog),
    /// Show one random post matching the tags
    Random(RandomPost),
    /// Show or create the config file
    Config(ConfigCmd),
}

#[derive(Parser, Debug)]
#[clap(name = "Gelbooru Client", author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub mode: Commands,

    /// API key from the Gelbooru account options page
    #[clap(long, env = "GELBOORU_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// User id from the Gelbooru account options page
    #[clap(long, env = "GELBOORU_USER_ID", global = true)]
    pub user_id: Option<String>,

    /// Read settings from this file instead of the default location
    #[clap(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long, action, default_value_t = false, global = true)]
    pub json: bool,
}

impl Cli {
    pub fn config_path(&self) -> Result<PathBuf, CliError> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(default_config_path()?),
        }
    }

    /// Merges the config file with the command line. Flags and env vars win over the file.
    pub fn settings(&self) -> Result<(Credentials, ServerConfig), CliError> {
        let path = self.config_path()?;
        let file = read_config_file(&path)?;
        debug!("Using config file {}", path.display());

        let server = file.server_config(ServerConfig::default());
        let base = file.credentials.unwrap_or_default();

        let credentials = Credentials {
            api_key: self.api_key.clone().unwrap_or(base.api_key),
            user_id: self.user_id.clone().unwrap_or(base.user_id),
        };

        if credentials.api_key.is_empty() || credentials.user_id.is_empty() {
            warn!("No API credentials configured, requests may be rejected or limited");
        }

        Ok((credentials, server))
    }

    pub fn build_client(&self) -> Result<GelbooruClient, CliError> {
        let (credentials, server) = self.settings()?;
        Ok(GelbooruClient::with_config(credentials, server)?)
    }
}
