//! HTTP REST API
//!
//! - `common`: response envelope and validated JSON extractor
//! - `modules`: one directory per resource (chargers, bookings, stats, health, metrics)
//! - `router`: route assembly with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
