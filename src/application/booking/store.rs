//! Booking store — the persisted reservation log
//!
//! An append-only collection of Bookings serialized as one JSON array under
//! a single storage key. The array is stored newest-first and replaced
//! wholesale on every write. There is no per-item update or delete and no
//! schema version tag on the payload.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::{Booking, Charger, StorageError};
use crate::infrastructure::storage::KeyValueStore;

/// Owner of the persisted booking collection.
///
/// All reads and writes of the collection go through this type; other
/// components only see snapshots it returns.
pub struct BookingStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl BookingStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Append a booking for `charger`, dated `date` (defaults to now).
    ///
    /// Read-modify-write without locking: two near-simultaneous saves are
    /// last-write-wins and one booking may be lost. The intended deployment
    /// is a single active user, so this stays a documented limitation.
    pub async fn save(
        &self,
        charger: Charger,
        date: Option<DateTime<Utc>>,
    ) -> Result<Booking, StorageError> {
        let booking = Booking::new(charger, date);

        let mut bookings = self.list().await?;
        bookings.insert(0, booking.clone());

        let payload = serde_json::to_string(&bookings)?;
        self.store.set(&self.key, &payload).await?;

        info!(
            transaction_id = %booking.transaction_id,
            total = bookings.len(),
            "Booking persisted"
        );
        Ok(booking)
    }

    /// Current collection snapshot, newest first.
    ///
    /// An absent key is an empty collection. A stored value that fails to
    /// parse is logged and also read as empty; the next save overwrites it.
    pub async fn list(&self) -> Result<Vec<Booking>, StorageError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(bookings) => Ok(bookings),
            Err(e) => {
                warn!(key = %self.key, "Stored bookings failed to parse, reading as empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Drop the entire collection — the only deletion path that exists.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key).await?;
        info!(key = %self.key, "Booking collection cleared");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
