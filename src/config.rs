//! Configuration module
//!
//! `AppConfig` is loaded from a TOML file (`PLUGPOINT_CONFIG` env var or
//! `~/.config/plugpoint/config.toml`). Every section and field is optional
//! in the file; anything missing falls back to the defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ── Named defaults ─────────────────────────────────────────────

/// Default catalog endpoint: Valencia open-data EV chargers dataset.
pub const DEFAULT_CATALOG_URL: &str = "https://valencia.opendatasoft.com/api/v2/catalog/datasets/carregadors-vehicles-electrics-cargadores-vehiculos-electricos/records/";

/// Records requested per catalog fetch.
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

/// Fallback position when upstream geodata is missing (Valencia city center).
pub const DEFAULT_FALLBACK_LAT: f64 = 39.4699;
pub const DEFAULT_FALLBACK_LON: f64 = -0.3763;

/// Rated power (kW) at or above which a charger is priced as fast.
pub const DEFAULT_FAST_THRESHOLD_KW: u32 = 40;

/// Fast tier: 2.99 reservation fee, 0.55 per kWh.
pub const DEFAULT_FAST_BOOKING_FEE_CENTS: u32 = 299;
pub const DEFAULT_FAST_PRICE_PER_KWH_CENTS: u32 = 55;

/// Slow tier: 1.99 reservation fee, 0.29 per kWh.
pub const DEFAULT_SLOW_BOOKING_FEE_CENTS: u32 = 199;
pub const DEFAULT_SLOW_PRICE_PER_KWH_CENTS: u32 = 29;

/// Flat per-session energy assumption for the statistics report, in kWh.
pub const DEFAULT_AVG_SESSION_KWH: u32 = 25;

/// Estimated CO2 savings per estimated kWh, in kg.
pub const DEFAULT_CO2_KG_PER_KWH: f64 = 0.4;

/// Simulated settlement delay of the payment gateway, in milliseconds.
pub const DEFAULT_SETTLEMENT_DELAY_MS: u64 = 1500;

/// Storage key holding the booking collection.
pub const DEFAULT_BOOKINGS_KEY: &str = "ev-bookings";

// ── Sections ───────────────────────────────────────────────────

/// REST API bind address
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Upstream open-data catalog
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Records endpoint of the provider dataset
    pub endpoint_url: String,
    /// `limit` query parameter sent with every fetch
    pub page_limit: u32,
    /// Position substituted when a record carries no geodata
    pub fallback_lat: f64,
    pub fallback_lon: f64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_CATALOG_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            fallback_lat: DEFAULT_FALLBACK_LAT,
            fallback_lon: DEFAULT_FALLBACK_LON,
        }
    }
}

/// Two-tier pricing applied during normalization.
///
/// Whether the threshold and amounts are business rules or placeholders is
/// not recorded anywhere, so they are configuration rather than code.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Currency code (ISO 4217) for fees and display formatting
    pub currency: String,
    /// Parsed power at or above this is the fast tier
    pub fast_threshold_kw: u32,
    pub fast_booking_fee_cents: u32,
    pub fast_price_per_kwh_cents: u32,
    pub slow_booking_fee_cents: u32,
    pub slow_price_per_kwh_cents: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            fast_threshold_kw: DEFAULT_FAST_THRESHOLD_KW,
            fast_booking_fee_cents: DEFAULT_FAST_BOOKING_FEE_CENTS,
            fast_price_per_kwh_cents: DEFAULT_FAST_PRICE_PER_KWH_CENTS,
            slow_booking_fee_cents: DEFAULT_SLOW_BOOKING_FEE_CENTS,
            slow_price_per_kwh_cents: DEFAULT_SLOW_PRICE_PER_KWH_CENTS,
        }
    }
}

/// Coefficients behind the statistics report
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    /// Assumed energy per booking, in kWh
    pub avg_session_kwh: u32,
    /// Assumed CO2 savings per kWh, in kg
    pub co2_kg_per_kwh: f64,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            avg_session_kwh: DEFAULT_AVG_SESSION_KWH,
            co2_kg_per_kwh: DEFAULT_CO2_KG_PER_KWH,
        }
    }
}

/// Simulated payment gateway
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Delay applied on the success path, standing in for settlement
    pub settlement_delay_ms: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            settlement_delay_ms: DEFAULT_SETTLEMENT_DELAY_MS,
        }
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// One file per key under `storage.path` (survives restarts)
    File,
    /// DashMap-backed store, for development and tests
    Memory,
}

impl StorageDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub driver: StorageDriver,
    /// Root directory for the file driver; defaults to the platform data dir
    pub path: Option<PathBuf>,
    /// Key under which the booking collection lives
    pub bookings_key: String,
}

impl StorageConfig {
    /// Root directory of the file driver, resolving the platform default.
    pub fn data_dir(&self) -> PathBuf {
        match &self.path {
            Some(path) => path.clone(),
            None => dirs_next::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("plugpoint"),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            driver: StorageDriver::File,
            path: None,
            bookings_key: DEFAULT_BOOKINGS_KEY.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter, overridable via `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ── AppConfig ──────────────────────────────────────────────────

/// Full service configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub pricing: PricingConfig,
    pub estimates: EstimateConfig,
    pub payment: PaymentConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let cfg = toml::from_str(&raw)?;
        Ok(cfg)
    }
}

/// Default config file path: `~/.config/plugpoint/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plugpoint")
        .join("config.toml")
}

// ── Tests ──────────────────────────────────────────────────────
