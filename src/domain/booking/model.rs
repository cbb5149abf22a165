//! Booking domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::charger::Charger;

/// A confirmed reservation against a charging point.
///
/// Immutable once created. The embedded charger snapshot keeps the pricing
/// that was in effect at reservation time even if the live catalog changes
/// later. The serialized form flattens the snapshot, so a persisted booking
/// is one flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    /// Reservation code shown to the user, unique per booking
    pub transaction_id: String,
    /// Snapshot of the charger at reservation time
    #[serde(flatten)]
    pub charger: Charger,
    /// Reservation time: creation time or a user-chosen future slot
    pub booking_date: DateTime<Utc>,
}

impl Booking {
    /// Build a booking for `charger`, dated `date` (defaults to now), with
    /// a freshly generated transaction id.
    pub fn new(charger: Charger, date: Option<DateTime<Utc>>) -> Self {
        Self {
            transaction_id: generate_transaction_id(),
            charger,
            booking_date: date.unwrap_or_else(Utc::now),
        }
    }
}

/// Generate a reservation code: `RES-<uuid-v4>`.
///
/// Codes are displayed to the user and must never collide across bookings;
/// a v4 uuid provides that without any coordination.
pub fn generate_transaction_id() -> String {
    format!("RES-{}", Uuid::new_v4())
}

// ── Tests ──────────────────────────────────────────────────────
