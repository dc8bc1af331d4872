//! Binary for the homework review relay.

use anyhow::Result;
use clap::Parser;
use homework_bot::{load_config, run_bot, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.command.overrides())?;
    run_bot(config, cli.command.mode()).await
}
