pub mod downloader;
pub mod parser;
pub mod pretty;
pub mod processor;

pub use downloader::{Page, PageDownloader};
pub use parser::FictionParser;
pub use processor::ChapterProcessor;

use std::fs;
use std::path::Path;

use scraper::Html;
use url::Url;

use crate::config::CrawlerConfig;
use crate::error::{FetchError, Result};
use crate::models::{Chapter, CrawlSummary, FictionId};
use crate::site::Site;
use crate::utils::output_dir_name;

pub struct RoyalRoadCrawler {
    site: Site,
    downloader: PageDownloader,
    processor: ChapterProcessor,
}

impl RoyalRoadCrawler {
    pub fn new(config: CrawlerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            site: config.site.clone(),
            downloader: PageDownloader::new(client.clone()),
            processor: ChapterProcessor::new(client, config.site, config.delay),
        })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The URL `/fiction/<id>` redirects to; it carries the fiction slug.
    pub async fn get_canonical_fiction_url(&self, fiction_id: &FictionId) -> Result<Url> {
        let page = self.downloader.fetch(&self.site.fiction_url(fiction_id)).await?;
        Ok(page.url)
    }

    pub async fn get_chapter_list(&self, fiction_id: &FictionId) -> Result<Vec<Chapter>> {
        let page = self.downloader.fetch(&self.site.fiction_url(fiction_id)).await?;
        let document = Html::parse_document(&page.body);
        let chapters = FictionParser.parse_chapter_list(&document);
        tracing::debug!(fiction = %fiction_id, count = chapters.len(), "parsed chapter list");
        Ok(chapters)
    }

    pub async fn get_chapter_html(&self, chapter_url: &str) -> Result<String> {
        let url = self.site.chapter_url(chapter_url)?;
        self.processor.fetch_chapter_content(&url).await
    }

    /// Resolves the canonical URL, lists the chapters and writes each one to
    /// `<output_root>/<id>_<slug>/<title>.html`.
    pub async fn crawl_fiction(
        &self,
        fiction_id: &FictionId,
        output_root: &Path,
    ) -> Result<CrawlSummary> {
        tracing::info!(fiction = %fiction_id, "resolving canonical url");
        let canonical_url = self.get_canonical_fiction_url(fiction_id).await?;
        println!("Canonical fiction url: {canonical_url}");

        let output_dir = output_root.join(output_dir_name(&canonical_url, fiction_id)?);

        tracing::info!(fiction = %fiction_id, "listing chapters");
        let chapters = self.get_chapter_list(fiction_id).await?;
        if chapters.is_empty() {
            tracing::warn!(fiction = %fiction_id, "fiction page has no chapter rows");
        }

        fs::create_dir_all(&output_dir).map_err(|source| FetchError::Io {
            path: output_dir.clone(),
            source,
        })?;

        let saved = self
            .processor
            .fetch_and_save_chapters(&chapters, &output_dir)
            .await?;
        tracing::info!(
            fiction = %fiction_id,
            saved = saved.len(),
            dir = %output_dir.display(),
            "done"
        );

        Ok(CrawlSummary {
            fiction_id: fiction_id.clone(),
            canonical_url,
            output_dir,
            chapters: saved,
        })
    }
}
