#![deny(clippy::all)]
use clap::Parser;
use color_eyre::eyre::Result;
use gelbooru_cli::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    env_logger::builder().format_timestamp(None).init();
    color_eyre::install()?;

    match &args.mode {
        Commands::Config(com) => com.run(&args)?,
        Commands::Posts(com) => com.run(&args.build_client()?, args.json).await?,
        Commands::Tags(com) => com.run(&args.build_client()?, args.json).await?,
        Commands::Random(com) => com.run(&args.build_client()?, args.json).await?,
    }

    Ok(())
}
