//! Charger catalog endpoint

pub mod dto;
pub mod handlers;

pub use dto::ChargerDto;
pub use handlers::{list_chargers, ChargerAppState};
