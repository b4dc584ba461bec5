mod archive;
mod commands;
mod config;
mod nextcloud;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "capsule")]
#[command(about = "Snapshot your Nextcloud calendars and contacts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot calendars and contacts
    Snapshot {
        /// Path of the config file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,

        /// Path of the zip archive to snapshot into
        #[arg(short, long, default_value = "archive.zip")]
        archive: PathBuf,

        /// List the archive paths that would be written, without fetching anything
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Snapshot {
            config,
            archive,
            dry_run,
        } => commands::snapshot::run(&config, &archive, dry_run).await,
    }
}
