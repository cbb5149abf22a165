//! Usage statistics recomputed from the booking collection
//!
//! Pure fold over the current snapshot; nothing is cached between calls.
//! Energy and CO2 are flat estimates (configured per-session kWh and kg/kWh
//! coefficients), not derived from actual charger power.

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::EstimateConfig;
use crate::domain::Booking;

/// Booking count per distinct label, insertion order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CountBucket {
    pub label: String,
    pub value: u64,
}

/// Spend per distinct label, insertion order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SpendBucket {
    pub label: String,
    pub spent_cents: u64,
}

/// Aggregate usage report over the booking collection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UsageReport {
    /// Number of bookings in the snapshot
    pub booking_count: u64,
    /// Sum of reservation fees in minor currency units
    pub total_spent_cents: u64,
    /// Sum of reservation fees in major currency units
    pub total_spent: f64,
    /// Estimated energy: per-session assumption times booking count, kWh
    pub total_energy_kwh: u64,
    /// Estimated emissions saved, kg, rendered with one decimal place
    pub co2_saved_kg: String,
    /// Bookings per connector type
    pub by_connector: Vec<CountBucket>,
    /// Spend per rated-power label
    pub by_power: Vec<SpendBucket>,
}

impl UsageReport {
    /// Recompute the report from a booking snapshot.
    ///
    /// An empty snapshot yields all-zero metrics and empty groupings.
    pub fn from_bookings(bookings: &[Booking], estimates: &EstimateConfig) -> Self {
        let booking_count = bookings.len() as u64;
        let total_spent_cents: u64 = bookings
            .iter()
            .map(|b| b.charger.booking_fee_cents as u64)
            .sum();

        let total_energy_kwh = estimates.avg_session_kwh as u64 * booking_count;
        let co2_saved_kg = format!(
            "{:.1}",
            estimates.co2_kg_per_kwh * total_energy_kwh as f64
        );

        let mut by_connector: Vec<CountBucket> = Vec::new();
        let mut by_power: Vec<SpendBucket> = Vec::new();
        for booking in bookings {
            match by_connector
                .iter_mut()
                .find(|b| b.label == booking.charger.connector_type)
            {
                Some(bucket) => bucket.value += 1,
                None => by_connector.push(CountBucket {
                    label: booking.charger.connector_type.clone(),
                    value: 1,
                }),
            }

            let fee = booking.charger.booking_fee_cents as u64;
            match by_power.iter_mut().find(|b| b.label == booking.charger.power) {
                Some(bucket) => bucket.spent_cents += fee,
                None => by_power.push(SpendBucket {
                    label: booking.charger.power.clone(),
                    spent_cents: fee,
                }),
            }
        }

        Self {
            booking_count,
            total_spent_cents,
            total_spent: total_spent_cents as f64 / 100.0,
            total_energy_kwh,
            co2_saved_kg,
            by_connector,
            by_power,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
