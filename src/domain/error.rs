//! Error types per pipeline stage

use thiserror::Error;

/// Failures of the upstream catalog fetch.
///
/// A failed fetch is distinct from an empty catalog: an upstream page with
/// zero records is `Ok(vec![])` at the call site, never an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(String),

    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// Failures of the key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failures of the payment gateway.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Card was rejected; the message is shown to the user as-is.
    #[error("{0}")]
    Declined(String),

    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

/// Failures of the booking flow as a whole.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
