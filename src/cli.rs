use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::{CrawlerConfig, DEFAULT_USER_AGENT};
use crate::error::Result;
use crate::site::{ROYAL_ROAD_BASE_URL, Site};

pub const SAMPLE_FICTION_URL: &str = "https://www.royalroad.com/fiction/25225/delve";

/// Download a fiction's chapters as HTML files. Without a subcommand, runs
/// `fetch`.
#[derive(Debug, Parser)]
#[command(author, version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub fetch: FetchArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download every chapter into `<out>/<id>_<slug>/`.
    Fetch(FetchArgs),
    /// Print the chapter list as JSON.
    Chapters(FictionArgs),
    /// Print the fiction id and its canonical URL.
    Resolve(FictionArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Fiction id or any fiction/chapter URL.
    #[arg(default_value = SAMPLE_FICTION_URL)]
    pub fiction: String,

    /// Root directory for fiction folders.
    #[arg(long, default_value = "output")]
    pub out: String,

    #[command(flatten)]
    pub http: HttpArgs,
}

#[derive(Debug, Args)]
pub struct FictionArgs {
    /// Fiction id or any fiction/chapter URL.
    pub fiction: String,

    #[command(flatten)]
    pub http: HttpArgs,
}

#[derive(Debug, Args)]
pub struct HttpArgs {
    /// Site origin.
    #[arg(long, default_value = ROYAL_ROAD_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout.
    #[arg(long, default_value_t = 3)]
    pub timeout_secs: u64,

    /// Delay between chapter requests (politeness).
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl HttpArgs {
    pub fn to_config(&self) -> Result<CrawlerConfig> {
        Ok(CrawlerConfig::default()
            .with_site(Site::parse(&self.base_url)?)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_delay(Duration::from_millis(self.delay_ms))
            .with_user_agent(self.user_agent.as_str()))
    }
}
