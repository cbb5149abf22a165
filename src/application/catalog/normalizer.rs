//! Raw record → Charger normalization
//!
//! Pure and total: one raw record in, exactly one Charger out, never an
//! error. Every missing or malformed upstream field resolves to a documented
//! default instead.

use serde_json::Value;

use crate::config::{CatalogConfig, PricingConfig};
use crate::domain::{Charger, Coordinates, PowerTier};

use super::record::RawRecord;

/// Placeholder for records without an emplacement.
pub const DEFAULT_ADDRESS: &str = "Location unknown";
/// Placeholder for records without a rated-power string.
pub const DEFAULT_POWER: &str = "Not specified";
/// Placeholder for records without a connector label.
pub const DEFAULT_CONNECTOR: &str = "Standard";
/// Placeholder for records without price text.
pub const DEFAULT_PRICE: &str = "Check App";

/// Turns the provider's loosely-typed field bags into Chargers.
#[derive(Debug, Clone)]
pub struct Normalizer {
    fallback: Coordinates,
    pricing: PricingConfig,
}

impl Normalizer {
    pub fn new(catalog: &CatalogConfig, pricing: PricingConfig) -> Self {
        Self {
            fallback: Coordinates::new(catalog.fallback_lat, catalog.fallback_lon),
            pricing,
        }
    }

    /// Normalize one raw record into a Charger.
    pub fn normalize(&self, record: RawRecord) -> Charger {
        let fields = record.fields;

        let power = text_or(fields.potenc_ia, DEFAULT_POWER);
        let tier = PowerTier::classify(leading_number(&power), self.pricing.fast_threshold_kw);
        let (price_per_kwh_cents, booking_fee_cents) = match tier {
            PowerTier::Fast => (
                self.pricing.fast_price_per_kwh_cents,
                self.pricing.fast_booking_fee_cents,
            ),
            PowerTier::Slow => (
                self.pricing.slow_price_per_kwh_cents,
                self.pricing.slow_booking_fee_cents,
            ),
        };

        // Provided coordinates are used verbatim, no range validation.
        let coordinates = fields
            .geo_point_2d
            .map(|g| Coordinates::new(g.lat, g.lon))
            .unwrap_or(self.fallback);

        Charger {
            id: record.id,
            address: text_or(fields.emplazamie, DEFAULT_ADDRESS),
            power,
            connector_type: text_or(fields.conector, DEFAULT_CONNECTOR),
            price: text_or(fields.precio_iv, DEFAULT_PRICE),
            outlets: coerce_outlets(fields.toma.as_ref()),
            coordinates,
            tier,
            price_per_kwh_cents,
            booking_fee_cents,
        }
    }
}

/// Upstream string if present and non-blank, else the placeholder.
fn text_or(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => placeholder.to_string(),
    }
}

/// Outlet count coercion: the field arrives as a JSON number or string;
/// anything that does not parse to an integer >= 1 collapses to 1.
fn coerce_outlets(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n >= 1 => n.min(u32::MAX as u64) as u32,
        _ => 1,
    }
}

/// Parse the leading integer of a display string ("50 kW" → 50).
/// Strings that do not start with a digit parse to 0.
fn leading_number(s: &str) -> u32 {
    let digits: String = s
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::catalog::record::{GeoPoint, RawFields};
    use crate::config::{DEFAULT_FALLBACK_LAT, DEFAULT_FALLBACK_LON};

    fn normalizer() -> Normalizer {
        Normalizer::new(&CatalogConfig::default(), PricingConfig::default())
    }

    fn record(fields: RawFields) -> RawRecord {
        RawRecord {
            id: "rec-1".into(),
            fields,
        }
    }

    #[test]
    fn empty_record_gets_all_defaults() {
        let c = normalizer().normalize(record(RawFields::default()));
        assert_eq!(c.id, "rec-1");
        assert_eq!(c.address, DEFAULT_ADDRESS);
        assert_eq!(c.power, DEFAULT_POWER);
        assert_eq!(c.connector_type, DEFAULT_CONNECTOR);
        assert_eq!(c.price, DEFAULT_PRICE);
        assert_eq!(c.outlets, 1);
        assert_eq!(
            c.coordinates,
            Coordinates::new(DEFAULT_FALLBACK_LAT, DEFAULT_FALLBACK_LON)
        );
        // unparsable power → 0 kW → slow tier
        assert_eq!(c.tier, PowerTier::Slow);
        assert_eq!(c.booking_fee_cents, 199);
        assert_eq!(c.price_per_kwh_cents, 29);
    }

    #[test]
    fn blank_strings_fall_back_to_placeholders() {
        let c = normalizer().normalize(record(RawFields {
            emplazamie: Some("   ".into()),
            conector: Some("".into()),
            ..Default::default()
        }));
        assert_eq!(c.address, DEFAULT_ADDRESS);
        assert_eq!(c.connector_type, DEFAULT_CONNECTOR);
    }

    #[test]
    fn fast_power_gets_fast_pricing() {
        let c = normalizer().normalize(record(RawFields {
            potenc_ia: Some("50 kW".into()),
            ..Default::default()
        }));
        assert_eq!(c.tier, PowerTier::Fast);
        assert_eq!(c.booking_fee_cents, 299);
        assert_eq!(c.price_per_kwh_cents, 55);
    }

    #[test]
    fn threshold_power_is_fast() {
        let c = normalizer().normalize(record(RawFields {
            potenc_ia: Some("40kW".into()),
            ..Default::default()
        }));
        assert_eq!(c.tier, PowerTier::Fast);
    }

    #[test]
    fn slow_power_gets_slow_pricing() {
        let c = normalizer().normalize(record(RawFields {
            potenc_ia: Some("22 kW".into()),
            ..Default::default()
        }));
        assert_eq!(c.tier, PowerTier::Slow);
        assert_eq!(c.booking_fee_cents, 199);
        assert_eq!(c.price_per_kwh_cents, 29);
    }

    #[test]
    fn power_without_leading_digits_is_slow() {
        let c = normalizer().normalize(record(RawFields {
            potenc_ia: Some("kW 50".into()),
            ..Default::default()
        }));
        assert_eq!(c.power, "kW 50");
        assert_eq!(c.tier, PowerTier::Slow);
    }

    #[test]
    fn outlet_coercion() {
        let cases: Vec<(Option<Value>, u32)> = vec![
            (None, 1),
            (Some(serde_json::json!("2")), 2),
            (Some(serde_json::json!(3)), 3),
            (Some(serde_json::json!("zero")), 1),
            (Some(serde_json::json!(0)), 1),
            (Some(serde_json::json!(-4)), 1),
            (Some(serde_json::json!("-4")), 1),
        ];
        for (toma, expected) in cases {
            let c = normalizer().normalize(record(RawFields {
                toma,
                ..Default::default()
            }));
            assert_eq!(c.outlets, expected);
        }
    }

    #[test]
    fn provided_coordinates_are_kept_verbatim() {
        let c = normalizer().normalize(record(RawFields {
            geo_point_2d: Some(GeoPoint {
                lat: 123.0,
                lon: -456.0,
            }),
            ..Default::default()
        }));
        // out-of-range values are not validated, only absence triggers the fallback
        assert_eq!(c.coordinates, Coordinates::new(123.0, -456.0));
    }

    #[test]
    fn leading_number_parsing() {
        assert_eq!(leading_number("50 kW"), 50);
        assert_eq!(leading_number("  7,4 kW"), 7);
        assert_eq!(leading_number("kW"), 0);
        assert_eq!(leading_number(""), 0);
    }

    #[test]
    fn custom_threshold_is_honored() {
        let pricing = PricingConfig {
            fast_threshold_kw: 100,
            ..Default::default()
        };
        let n = Normalizer::new(&CatalogConfig::default(), pricing);
        let c = n.normalize(record(RawFields {
            potenc_ia: Some("50 kW".into()),
            ..Default::default()
        }));
        assert_eq!(c.tier, PowerTier::Slow);
    }
}
