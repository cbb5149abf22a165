//! Booking flow: payment-then-persist service over the append-only store

pub mod service;
pub mod store;

pub use service::BookingService;
pub use store::BookingStore;
