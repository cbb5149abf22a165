//! Upstream catalog client

mod open_data;

pub use open_data::OpenDataClient;
