pub mod bookings;
pub mod chargers;
pub mod health;
pub mod metrics;
pub mod stats;
