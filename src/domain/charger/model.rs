//! Charger domain entity

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pricing tier derived from rated power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PowerTier {
    /// Rated power at or above the fast threshold
    Fast,
    /// Everything below the threshold, including unparsable power strings
    Slow,
}

impl PowerTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Slow => "slow",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "fast" => Self::Fast,
            _ => Self::Slow,
        }
    }

    /// Classify a parsed power value against the fast threshold.
    pub fn classify(power_kw: u32, fast_threshold_kw: u32) -> Self {
        if power_kw >= fast_threshold_kw {
            Self::Fast
        } else {
            Self::Slow
        }
    }
}

impl std::fmt::Display for PowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geographic position of a charging point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One normalized EV charging point.
///
/// Every field is always present: the normalizer resolves anything missing
/// or malformed upstream to a documented default, so consumers never deal
/// with optional charger data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Charger {
    /// Upstream record identifier
    pub id: String,
    /// Street address or emplacement description
    pub address: String,
    /// Rated power as a display string (e.g. "50 kW")
    pub power: String,
    /// Connector label (e.g. "Mennekes", "CHAdeMO")
    pub connector_type: String,
    /// Upstream price text, informational only (billing uses the tier fees)
    pub price: String,
    /// Number of outlets, always >= 1
    pub outlets: u32,
    /// Position; city-center fallback when upstream geodata is missing
    pub coordinates: Coordinates,
    /// Pricing tier derived from rated power
    pub tier: PowerTier,
    /// Energy rate in minor currency units per kWh
    pub price_per_kwh_cents: u32,
    /// Flat reservation fee in minor currency units
    pub booking_fee_cents: u32,
}

impl Charger {
    /// Energy rate in major currency units (e.g. 0.55).
    pub fn price_per_kwh(&self) -> f64 {
        self.price_per_kwh_cents as f64 / 100.0
    }
}

/// Format an amount in minor currency units as a human-readable string.
pub fn format_money(cents: u32, currency: &str) -> String {
    let major = cents / 100;
    let minor = cents % 100;
    format!("{}.{:02} {}", major, minor, currency)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_charger() -> Charger {
        Charger {
            id: "cp-001".into(),
            address: "Av. del Port 125".into(),
            power: "50 kW".into(),
            connector_type: "CHAdeMO".into(),
            price: "0,30 €/kWh".into(),
            outlets: 2,
            coordinates: Coordinates::new(39.4624, -0.3316),
            tier: PowerTier::Fast,
            price_per_kwh_cents: 55,
            booking_fee_cents: 299,
        }
    }

    #[test]
    fn classify_at_threshold_is_fast() {
        assert_eq!(PowerTier::classify(40, 40), PowerTier::Fast);
        assert_eq!(PowerTier::classify(41, 40), PowerTier::Fast);
        assert_eq!(PowerTier::classify(150, 40), PowerTier::Fast);
    }

    #[test]
    fn classify_below_threshold_is_slow() {
        assert_eq!(PowerTier::classify(39, 40), PowerTier::Slow);
        assert_eq!(PowerTier::classify(7, 40), PowerTier::Slow);
        assert_eq!(PowerTier::classify(0, 40), PowerTier::Slow);
    }

    #[test]
    fn tier_display_roundtrip() {
        for tier in &[PowerTier::Fast, PowerTier::Slow] {
            assert_eq!(&PowerTier::from_str(tier.as_str()), tier);
        }
        assert_eq!(PowerTier::Fast.to_string(), "fast");
    }

    #[test]
    fn unknown_tier_string_defaults_to_slow() {
        assert_eq!(PowerTier::from_str("turbo"), PowerTier::Slow);
    }

    #[test]
    fn price_per_kwh_in_major_units() {
        let c = sample_charger();
        assert_eq!(c.price_per_kwh(), 0.55);
    }

    #[test]
    fn format_money_pads_minor_units() {
        assert_eq!(format_money(299, "EUR"), "2.99 EUR");
        assert_eq!(format_money(5, "EUR"), "0.05 EUR");
        assert_eq!(format_money(0, "EUR"), "0.00 EUR");
        assert_eq!(format_money(12345, "EUR"), "123.45 EUR");
    }

    #[test]
    fn charger_json_roundtrip() {
        let c = sample_charger();
        let json = serde_json::to_string(&c).unwrap();
        let back: Charger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(json.contains("\"tier\":\"fast\""));
    }
}
