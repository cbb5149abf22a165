//! Usage statistics endpoint

pub mod handlers;

pub use handlers::{usage_stats, StatsAppState};
