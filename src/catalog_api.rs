//! Catalog client
//!
//! One `GET <base>/characters?page=N` per call. No retries and no caching:
//! the caller decides what a failure means for the view.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{CatalogPage, CharacterRecord};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("page numbers start at 1, got {0}")]
    InvalidPage(u32),
    #[error("catalog request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("catalog returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode catalog response: {0}")]
    Decode(String),
}

/// Anything that can hand out a page of characters.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError>;
}

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

fn http_client() -> &'static reqwest::Client {
    HTTP.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("[catalog_api] custom client failed ({e}), using defaults");
                reqwest::Client::new()
            })
    })
}

/// The remote catalog over HTTP.
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    base_url: String,
    timeout: Duration,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    pub fn characters_url(&self) -> String {
        format!("{}/characters", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }

        log::info!("[catalog_api] GET {} page={page}", self.characters_url());

        let response = http_client()
            .get(self.characters_url())
            .query(&[("page", page)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(CatalogError::Network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CatalogError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(CatalogError::Network)?;
        let envelope: CatalogPage =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))?;

        log::debug!(
            "[catalog_api] page {page}: {} records",
            envelope.data.len()
        );
        Ok(envelope.data)
    }
}

/// In-memory catalog: fixed pages, optional per-page delay and failure.
///
/// Pages past the data return an empty list, like the real catalog does.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    pages: HashMap<u32, Vec<CharacterRecord>>,
    delays: HashMap<u32, Duration>,
    failing: HashSet<u32>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `records` out as consecutive pages of `page_size`, starting at page 1.
    pub fn paged(records: Vec<CharacterRecord>, page_size: usize) -> Self {
        let mut catalog = Self::new();
        for (i, chunk) in records.chunks(page_size.max(1)).enumerate() {
            catalog = catalog.with_page(i as u32 + 1, chunk.to_vec());
        }
        catalog
    }

    pub fn with_page(mut self, page: u32, records: Vec<CharacterRecord>) -> Self {
        self.pages.insert(page, records);
        self
    }

    pub fn with_delay(mut self, page: u32, delay: Duration) -> Self {
        self.delays.insert(page, delay);
        self
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }

    /// Small built-in catalog for `--offline`.
    pub fn sample() -> Self {
        const NAMES: &[(u64, &str, Option<&str>)] = &[
            (6, "'Olu Mel", Some("https://static.wikia.nocookie.net/disney/images/6/61/Olu_main.png")),
            (25, "Abu", Some("https://static.wikia.nocookie.net/disney/images/3/3f/Profile_-_Abu.png/revision/latest?cb=20200913202154")),
            (30, "Ace", Some("https://static.wikia.nocookie.net/disney/images/1/1e/Profile_-_Ace.png")),
            (44, "Aladdin", Some("https://static.wikia.nocookie.net/disney/images/5/53/Profile_-_Aladdin.png/revision/latest")),
            (52, "Alice", None),
            (61, "Anna", Some("https://static.wikia.nocookie.net/disney/images/4/45/Profile_-_Anna.png")),
            (73, "Ariel", Some("https://static.wikia.nocookie.net/disney/images/9/9b/Profile_-_Ariel.png")),
            (88, "Baloo", None),
            (95, "Bambi", Some("https://static.wikia.nocookie.net/disney/images/b/b7/Profile_-_Bambi.png")),
            (102, "Belle", Some("https://static.wikia.nocookie.net/disney/images/7/7c/Profile_-_Belle.png/revision/latest")),
            (117, "Buzz Lightyear", Some("https://static.wikia.nocookie.net/disney/images/1/16/Profile_-_Buzz.png")),
            (128, "Cinderella", Some("")),
            (133, "Dumbo", Some("https://static.wikia.nocookie.net/disney/images/8/8d/Profile_-_Dumbo.png")),
            (149, "Elsa", Some("https://static.wikia.nocookie.net/disney/images/9/95/Profile_-_Elsa.png")),
            (156, "Genie", None),
            (170, "Goofy", Some("https://static.wikia.nocookie.net/disney/images/2/27/Profile_-_Goofy.png/revision/latest/scale-to-width-down/516")),
            (188, "Hercules", Some("https://static.wikia.nocookie.net/disney/images/6/65/Profile_-_Hercules.png")),
        ];
        let records = NAMES
            .iter()
            .map(|&(id, name, url)| CharacterRecord::new(id, name, url))
            .collect();
        Self::paged(records, 12)
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_page(&self, page: u32) -> Result<Vec<CharacterRecord>, CatalogError> {
        if page == 0 {
            return Err(CatalogError::InvalidPage(page));
        }
        if let Some(delay) = self.delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&page) {
            return Err(CatalogError::Status {
                status: 503,
                body: format!("page {page} unavailable"),
            });
        }
        Ok(self.pages.get(&page).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let catalog = HttpCatalog::new("https://api.disneyapi.dev/", 1000);
        assert_eq!(catalog.characters_url(), "https://api.disneyapi.dev/characters");
    }

    #[tokio::test]
    async fn static_catalog_pages_and_beyond_end() {
        let catalog = StaticCatalog::sample();
        assert_eq!(catalog.fetch_page(1).await.unwrap().len(), 12);
        assert_eq!(catalog.fetch_page(2).await.unwrap().len(), 5);
        assert!(catalog.fetch_page(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn page_zero_is_rejected_before_fetching() {
        let catalog = HttpCatalog::new("http://127.0.0.1:9", 1000);
        let err = catalog.fetch_page(0).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPage(0)));
    }

    #[tokio::test]
    async fn failing_page_reports_status() {
        let catalog = StaticCatalog::sample().failing_on(2);
        let err = catalog.fetch_page(2).await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
        assert!(catalog.fetch_page(1).await.is_ok());
    }
}
