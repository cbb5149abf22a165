//! Core business entities and types

pub mod booking;
pub mod charger;
pub mod error;

// Re-export commonly used types
pub use booking::{generate_transaction_id, Booking};
pub use charger::{format_money, Charger, Coordinates, PowerTier};
pub use error::{BookingError, CatalogError, PaymentError, StorageError};
