//! Business logic: catalog pipeline, booking flow, statistics

pub mod booking;
pub mod catalog;
pub mod ports;
pub mod stats;

pub use booking::{BookingService, BookingStore};
pub use catalog::{CatalogSource, ChargerDirectory, Normalizer};
pub use ports::{CardDetails, PaymentGateway, PaymentToken};
pub use stats::UsageReport;
