//! Payment gateway implementations

mod simulated;

pub use simulated::SimulatedCardGateway;
