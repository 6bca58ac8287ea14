use clap::Args;
use gelbooru_client::config::serialize::{read_config_file, write_sample_config};
use owo_colors::OwoColorize;

use crate::{cli::Cli, error::CliError};

#[derive(Debug, Args)]
pub struct ConfigCmd {
    /// Write a commented sample config if none exists yet
    #[clap(long, action, default_value_t = false)]
    pub init: bool,
}

impl ConfigCmd {
    pub fn run(&self, cli: &Cli) -> Result<(), CliError> {
        let path = cli.config_path()?;

        if self.init {
            if write_sample_config(&path)? {
                println!("{} {}", "Created".bold().green(), path.display());
            } else {
                println!("{} {}", "Already exists:".bold(), path.display());
            }
            return Ok(());
        }

        let file = read_config_file(&path)?;
        let has_credentials = file
            .credentials
            .is_some_and(|c| !c.api_key.is_empty() && !c.user_id.is_empty());

        println!("{} {}", "Config file:".bold(), path.display());
        println!("{} {}", "Exists:".bold(), path.exists());
        println!("{} {}", "Credentials set:".bold(), has_credentials);

        Ok(())
    }
}
