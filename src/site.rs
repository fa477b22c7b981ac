//! Fiction and chapter URL shapes for one hosting site.
//!
//! Accepted fiction URLs look like `<origin>/fiction/<id>` optionally followed by
//! `/<slug>` and `/chapter/<chapter_id>/<chapter_slug>`. Anything after the id
//! segment is ignored.

use url::Url;

use crate::error::{FetchError, Result};
use crate::models::FictionId;

pub const ROYAL_ROAD_BASE_URL: &str = "https://www.royalroad.com";

const FICTION_SEGMENT: &str = "fiction";

#[derive(Debug, Clone)]
pub struct Site {
    base_url: Url,
}

impl Site {
    pub fn new(base_url: Url) -> Result<Self> {
        if base_url.cannot_be_a_base() || base_url.host_str().is_none() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    pub fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|_| FetchError::InvalidUrl(base_url.to_owned()))?;
        Self::new(url)
    }

    pub fn royal_road() -> Self {
        Self {
            base_url: Url::parse(ROYAL_ROAD_BASE_URL).expect("static base url"),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<origin>/fiction/<id>`, the pre-redirect fiction page.
    pub fn fiction_url(&self, id: &FictionId) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/{FICTION_SEGMENT}/{id}"));
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// Matches the raw input against `<origin>/fiction/<digits>` followed by
    /// `/` or the end of the string. The input is not normalized first.
    pub fn extract_id_from_url(&self, url: &str) -> Result<FictionId> {
        let invalid = || FetchError::InvalidUrl(url.to_owned());

        let path = url.strip_prefix(&self.origin()).ok_or_else(invalid)?;
        let mut segments = path.strip_prefix('/').ok_or_else(invalid)?.split('/');
        if segments.next() != Some(FICTION_SEGMENT) {
            return Err(invalid());
        }
        let id = segments.next().ok_or_else(invalid)?;
        id.parse().map_err(|_| invalid())
    }

    /// `scheme://host`, plus `:port` only when the base names a non-default one.
    fn origin(&self) -> String {
        let host = self.base_url.host_str().unwrap_or_default();
        match self.base_url.port() {
            Some(port) => format!("{}://{host}:{port}", self.base_url.scheme()),
            None => format!("{}://{host}", self.base_url.scheme()),
        }
    }

    /// Accepts a bare id or any fiction/chapter URL on this site.
    pub fn resolve_fiction(&self, input: &str) -> Result<FictionId> {
        let input = input.trim();
        if input.contains("://") {
            self.extract_id_from_url(input)
        } else {
            input.parse()
        }
    }

    /// Resolves a chapter link scraped from a fiction page.
    pub fn chapter_url(&self, chapter_url: &str) -> Result<Url> {
        let invalid = || FetchError::InvalidUrl(chapter_url.to_owned());
        let fiction_prefix = format!("/{FICTION_SEGMENT}/");

        if chapter_url.starts_with(&fiction_prefix) {
            return self.base_url.join(chapter_url).map_err(|_| invalid());
        }

        let parsed = Url::parse(chapter_url).map_err(|_| invalid())?;
        if self.is_same_origin(&parsed) && parsed.path().starts_with(&fiction_prefix) {
            Ok(parsed)
        } else {
            Err(invalid())
        }
    }

    fn is_same_origin(&self, url: &Url) -> bool {
        url.scheme() == self.base_url.scheme()
            && url.host_str() == self.base_url.host_str()
            && url.port_or_known_default() == self.base_url.port_or_known_default()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::royal_road()
    }
}

/// Validates an identifier given as a string or an integer.
pub fn normalize_id(value: impl std::fmt::Display) -> Result<FictionId> {
    value.to_string().parse()
}
