//! CLI parser and config loading.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::runner::RunMode;

#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(about = "Relay homework review status changes to Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the review API forever (config from env; flags override it).
    Run {
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Send the start message, poll once and exit.
    Once {
        #[command(flatten)]
        overrides: Overrides,
    },
}

impl Commands {
    pub fn mode(&self) -> RunMode {
        match self {
            Commands::Run { .. } => RunMode::Forever,
            Commands::Once { .. } => RunMode::Once,
        }
    }

    pub fn overrides(&self) -> &Overrides {
        match self {
            Commands::Run { overrides } | Commands::Once { overrides } => overrides,
        }
    }
}

/// Values that take precedence over the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Overrides PRACTICUM_TOKEN.
    #[arg(long)]
    pub practicum_token: Option<String>,
    /// Overrides TELEGRAM_TOKEN.
    #[arg(long)]
    pub telegram_token: Option<String>,
    /// Overrides RETRY_TIME_SECS.
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Load Config from environment, then apply CLI overrides.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(ref token) = overrides.practicum_token {
        config.practicum_token = token.clone();
    }
    if let Some(ref token) = overrides.telegram_token {
        config.telegram_token = token.clone();
    }
    if let Some(interval) = overrides.interval {
        config.retry_time_secs = interval;
    }
    Ok(config)
}
