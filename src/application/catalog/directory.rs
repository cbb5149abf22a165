//! Charger directory — the fetch pipeline
//!
//! One outbound read against the catalog source, normalized into Chargers.
//! A fetch failure is a distinct error value, never silently an empty list,
//! so callers can tell "no chargers" apart from "catalog unreachable".

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::{CatalogError, Charger};

use super::normalizer::Normalizer;
use super::record::CatalogPage;

/// Port to the upstream catalog endpoint.
///
/// The production implementation is
/// [`OpenDataClient`](crate::infrastructure::catalog::OpenDataClient);
/// tests substitute stubs.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one page of raw records.
    async fn fetch_page(&self) -> Result<CatalogPage, CatalogError>;
}

/// Fetch-and-normalize pipeline over a [`CatalogSource`].
///
/// Stateless between calls: every invocation re-fetches, there is no cache,
/// no retry and no de-duplication of concurrent calls.
pub struct ChargerDirectory {
    source: Arc<dyn CatalogSource>,
    normalizer: Normalizer,
}

impl ChargerDirectory {
    pub fn new(source: Arc<dyn CatalogSource>, normalizer: Normalizer) -> Self {
        Self { source, normalizer }
    }

    /// Fetch the current page and normalize every record.
    ///
    /// An upstream page with zero records is `Ok(vec![])`; transport, status
    /// and decode failures are returned as [`CatalogError`] and logged here.
    pub async fn fetch_chargers(&self) -> Result<Vec<Charger>, CatalogError> {
        metrics::counter!("catalog_fetches_total").increment(1);

        let page = match self.source.fetch_page().await {
            Ok(page) => page,
            Err(e) => {
                metrics::counter!("catalog_fetch_failures_total").increment(1);
                error!("Catalog fetch failed: {}", e);
                return Err(e);
            }
        };

        let chargers: Vec<Charger> = page
            .records
            .into_iter()
            .map(|envelope| self.normalizer.normalize(envelope.record))
            .collect();

        info!(count = chargers.len(), "Fetched charger catalog");
        Ok(chargers)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::record::{RawFields, RawRecord, RecordEnvelope};
    use crate::config::{CatalogConfig, PricingConfig};

    struct StubSource {
        result: fn() -> Result<CatalogPage, CatalogError>,
    }

    #[async_trait]
    impl CatalogSource for StubSource {
        async fn fetch_page(&self) -> Result<CatalogPage, CatalogError> {
            (self.result)()
        }
    }

    fn directory(result: fn() -> Result<CatalogPage, CatalogError>) -> ChargerDirectory {
        ChargerDirectory::new(
            Arc::new(StubSource { result }),
            Normalizer::new(&CatalogConfig::default(), PricingConfig::default()),
        )
    }

    #[tokio::test]
    async fn normalizes_every_record() {
        let dir = directory(|| {
            Ok(CatalogPage {
                records: vec![
                    RecordEnvelope {
                        record: RawRecord {
                            id: "a".into(),
                            fields: RawFields {
                                potenc_ia: Some("50 kW".into()),
                                ..Default::default()
                            },
                        },
                    },
                    RecordEnvelope {
                        record: RawRecord {
                            id: "b".into(),
                            fields: RawFields::default(),
                        },
                    },
                ],
            })
        });

        let chargers = dir.fetch_chargers().await.unwrap();
        assert_eq!(chargers.len(), 2);
        assert_eq!(chargers[0].id, "a");
        assert_eq!(chargers[0].booking_fee_cents, 299);
        assert_eq!(chargers[1].booking_fee_cents, 199);
    }

    #[tokio::test]
    async fn empty_page_is_ok_empty() {
        let dir = directory(|| Ok(CatalogPage::default()));
        let chargers = dir.fetch_chargers().await.unwrap();
        assert!(chargers.is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_is_an_error_not_empty() {
        let dir = directory(|| Err(CatalogError::Status { status: 503 }));
        let err = dir.fetch_chargers().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 503 }));
    }
}
