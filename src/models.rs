use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FetchError;

/// Numeric fiction identifier, kept as the digit string the site uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FictionId(String);

impl FictionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FictionId {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(value.to_owned()))
        } else {
            Err(FetchError::InvalidId(value.to_owned()))
        }
    }
}

impl From<u32> for FictionId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for FictionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FictionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub url: String, // absolute, or site-relative starting with /fiction/
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedChapter {
    pub title: String,
    pub url: Url,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlSummary {
    pub fiction_id: FictionId,
    pub canonical_url: Url,
    pub output_dir: PathBuf,
    pub chapters: Vec<SavedChapter>,
}
