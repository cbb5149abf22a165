//! Charger aggregate
//!
//! Contains the normalized charging-point entity and the pricing tier.

pub mod model;

pub use model::{format_money, Charger, Coordinates, PowerTier};
