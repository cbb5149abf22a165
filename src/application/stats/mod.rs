//! Statistics aggregation over the booking collection

pub mod aggregator;

pub use aggregator::{CountBucket, SpendBucket, UsageReport};
