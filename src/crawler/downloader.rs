use url::Url;

use crate::error::{FetchError, Result};

/// A fetched page: the final URL after redirects and its decoded body.
#[derive(Debug)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

pub struct PageDownloader {
    client: reqwest::Client,
}

impl PageDownloader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// GET with redirects followed. Non-2xx statuses are errors.
    pub async fn fetch(&self, url: &Url) -> Result<Page> {
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?;

        let final_url = response.url().clone();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(%url, %final_url, bytes = body.len(), "fetched page");

        Ok(Page {
            url: final_url,
            body,
        })
    }
}
