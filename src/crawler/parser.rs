use scraper::{Html, Selector};

use super::pretty::prettify;
use crate::models::Chapter;

const CHAPTER_ROW: &str = "tr.chapter-row";
const CHAPTER_CONTENT: &str = "div.chapter-inner.chapter-content";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

pub struct FictionParser;

impl FictionParser {
    /// Chapter rows in document order. A row whose first anchor has no
    /// `href` (or that has no anchor) is skipped.
    pub fn parse_chapter_list(&self, document: &Html) -> Vec<Chapter> {
        let row_selector = selector(CHAPTER_ROW);
        let anchor_selector = selector("a");

        document
            .select(&row_selector)
            .filter_map(|row| {
                // first anchor carries the chapter name
                let anchor = row.select(&anchor_selector).next()?;
                let href = anchor.value().attr("href")?;
                Some(Chapter {
                    title: anchor.text().collect::<String>().trim().to_string(),
                    url: href.to_string(),
                })
            })
            .collect()
    }

    pub fn extract_chapter_content(&self, document: &Html) -> Option<String> {
        let content_selector = selector(CHAPTER_CONTENT);
        document.select(&content_selector).next().map(prettify)
    }
}
