//! HTTP client for the open-data catalog endpoint

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::application::catalog::{CatalogPage, CatalogSource};
use crate::config::CatalogConfig;
use crate::domain::CatalogError;

/// Reqwest-backed [`CatalogSource`] issuing one unauthenticated
/// `GET ?limit=<N>` per fetch.
///
/// No retry, no explicit timeout, no caching: mitigating a hung upstream is
/// a caller concern.
#[derive(Debug, Clone)]
pub struct OpenDataClient {
    http: Client,
    endpoint_url: String,
    page_limit: u32,
}

impl OpenDataClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint_url: config.endpoint_url.clone(),
            page_limit: config.page_limit,
        }
    }
}

#[async_trait]
impl CatalogSource for OpenDataClient {
    async fn fetch_page(&self) -> Result<CatalogPage, CatalogError> {
        debug!(url = %self.endpoint_url, limit = self.page_limit, "Fetching catalog page");

        let response = self
            .http
            .get(&self.endpoint_url)
            .query(&[("limit", self.page_limit)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
            });
        }

        let page = response.json::<CatalogPage>().await?;
        Ok(page)
    }
}

// ── Tests ──────────────────────────────────────────────────────
