//! Raw upstream catalog records
//!
//! Wire shape of the open-data records endpoint:
//! `{ "records": [ { "record": { "id": ..., "fields": {...} } } ] }`.
//! Field names are the provider's own and can change without versioning on
//! their side; nothing here is validated beyond basic JSON structure, the
//! normalizer absorbs whatever arrives.

use serde::Deserialize;
use serde_json::Value;

/// One page of the upstream records endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub records: Vec<RecordEnvelope>,
}

/// Wrapper object around each record in the page.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordEnvelope {
    pub record: RawRecord,
}

/// One raw charging-point record as the provider ships it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub fields: RawFields,
}

/// The provider's field bag. Every field is optional in practice.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFields {
    /// Emplacement (street address)
    pub emplazamie: Option<String>,
    /// Rated power display string
    pub potenc_ia: Option<String>,
    /// Connector label
    pub conector: Option<String>,
    /// Price display text
    pub precio_iv: Option<String>,
    /// Outlet count; observed both as a JSON number and as a string
    pub toma: Option<Value>,
    /// Geodata, absent on some records
    pub geo_point_2d: Option<GeoPoint>,
}

/// Upstream geo point.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

// ── Tests ──────────────────────────────────────────────────────
