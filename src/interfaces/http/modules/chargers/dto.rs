//! Charger DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{format_money, Charger, Coordinates};

/// Charger as served to clients: the normalized model plus display pricing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargerDto {
    pub id: String,
    pub address: String,
    pub power: String,
    pub connector_type: String,
    /// Upstream price text, informational only
    pub price: String,
    pub outlets: u32,
    pub coordinates: Coordinates,
    /// Pricing tier, `"fast"` or `"slow"`
    pub tier: String,
    pub price_per_kwh_cents: u32,
    pub booking_fee_cents: u32,
    /// Reservation fee formatted for display, e.g. `"2.99 EUR"`
    pub booking_fee_display: String,
}

impl ChargerDto {
    pub fn from_charger(charger: Charger, currency: &str) -> Self {
        Self {
            booking_fee_display: format_money(charger.booking_fee_cents, currency),
            id: charger.id,
            address: charger.address,
            power: charger.power,
            connector_type: charger.connector_type,
            price: charger.price,
            outlets: charger.outlets,
            coordinates: charger.coordinates,
            tier: charger.tier.as_str().to_string(),
            price_per_kwh_cents: charger.price_per_kwh_cents,
            booking_fee_cents: charger.booking_fee_cents,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
