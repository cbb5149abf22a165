//! # PlugPoint Charging Service
//!
//! Service around an EV-charger booking pipeline: it fetches charging points
//! from a public open-data catalog, normalizes them into a stable model with
//! derived two-tier pricing, reserves slots after a simulated card payment,
//! and recomputes usage statistics from the persisted booking collection.
//!
//! ## Architecture
//!
//! - **domain**: core entities (Charger, Booking) and error taxonomy
//! - **application**: catalog pipeline, booking flow, statistics
//! - **infrastructure**: open-data HTTP client, storage backends, payment gateway
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: graceful shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::create_api_router;
