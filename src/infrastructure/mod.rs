//! External concerns: upstream catalog client, storage backends, payment gateway

pub mod catalog;
pub mod payment;
pub mod storage;

pub use catalog::OpenDataClient;
pub use payment::SimulatedCardGateway;
pub use storage::{FileStore, InMemoryStore, KeyValueStore};
