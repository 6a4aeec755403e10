pub mod add;
pub mod bins;
pub mod bootstrap;
pub mod config;
pub mod recent;

use crate::libs::config::{Config, Credentials};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Show entries from the past 30 days")]
    Recent,
    #[command(about = "Show the config file of task short names")]
    Config,
    #[command(about = "Add a new time entry", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Show a weekly summary breakdown")]
    Bins,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let credentials = Credentials::from_env()?;

        // First run: seed the short-name cache instead of the requested verb.
        if !Config::exists()? {
            return bootstrap::cmd(&credentials).await;
        }

        match cli.command {
            Commands::Recent => recent::cmd(&credentials).await,
            Commands::Config => config::cmd(),
            Commands::Add(args) => add::cmd(&credentials, args).await,
            Commands::Bins => bins::cmd(&credentials).await,
        }
    }
}
