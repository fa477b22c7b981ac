pub mod cli;
pub mod commands;
pub mod config;
pub mod crawler;
pub mod error;
pub mod logging;
pub mod models;
pub mod site;
pub mod utils;

pub use config::CrawlerConfig;
pub use crawler::RoyalRoadCrawler;
pub use error::{FetchError, Result};
pub use models::{Chapter, CrawlSummary, FictionId, SavedChapter};
pub use site::{Site, normalize_id};
pub use utils::{output_dir_name, sanitize_filename};

/// Extracts the fiction id from a Royal Road fiction or chapter URL.
pub fn extract_id_from_url(url: &str) -> Result<FictionId> {
    Site::royal_road().extract_id_from_url(url)
}
