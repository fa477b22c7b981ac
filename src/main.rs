use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use rr_fetch::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    rr_fetch::logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        None => {
            rr_fetch::commands::fetch(cli.fetch).await.context("fetch")?;
        }
        Some(Command::Fetch(args)) => {
            rr_fetch::commands::fetch(args).await.context("fetch")?;
        }
        Some(Command::Chapters(args)) => {
            rr_fetch::commands::chapters(args).await.context("chapters")?;
        }
        Some(Command::Resolve(args)) => {
            rr_fetch::commands::resolve(args).await.context("resolve")?;
        }
    }

    Ok(())
}
