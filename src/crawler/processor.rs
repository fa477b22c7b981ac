use std::fs;
use std::path::Path;
use std::time::Duration;

use scraper::Html;
use url::Url;

use super::{FictionParser, PageDownloader};
use crate::error::{FetchError, Result};
use crate::models::{Chapter, SavedChapter};
use crate::site::Site;
use crate::utils::sanitize_filename;

pub struct ChapterProcessor {
    downloader: PageDownloader,
    site: Site,
    delay: Duration,
}

impl ChapterProcessor {
    pub fn new(client: reqwest::Client, site: Site, delay: Duration) -> Self {
        Self {
            downloader: PageDownloader::new(client),
            site,
            delay,
        }
    }

    /// Fetches a chapter page and returns its content container, pretty-printed.
    pub async fn fetch_chapter_content(&self, chapter_url: &Url) -> Result<String> {
        let page = self.downloader.fetch(chapter_url).await?;
        let document = Html::parse_document(&page.body);
        FictionParser
            .extract_chapter_content(&document)
            .ok_or_else(|| FetchError::ContentNotFound(page.url.to_string()))
    }

    /// Fetches and writes every chapter in order. The first failure stops the
    /// loop; files already written stay on disk.
    pub async fn fetch_and_save_chapters(
        &self,
        chapters: &[Chapter],
        output_dir: &Path,
    ) -> Result<Vec<SavedChapter>> {
        let mut saved = Vec::with_capacity(chapters.len());

        for (index, chapter) in chapters.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            println!("{}\t\t{}", chapter.title, chapter.url);
            let url = self.site.chapter_url(&chapter.url)?;
            tracing::info!(index = index + 1, total = chapters.len(), %url, "fetching chapter");

            let html = self.fetch_chapter_content(&url).await?;

            let path = output_dir.join(format!("{}.html", sanitize_filename(&chapter.title)));
            fs::write(&path, html).map_err(|source| FetchError::Io {
                path: path.clone(),
                source,
            })?;
            println!("Saved chapter to {}", path.display());

            saved.push(SavedChapter {
                title: chapter.title.clone(),
                url,
                path,
            });
        }

        Ok(saved)
    }
}
