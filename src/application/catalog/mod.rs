//! Catalog fetch pipeline: raw records, normalization, directory service

pub mod directory;
pub mod normalizer;
pub mod record;

pub use directory::{CatalogSource, ChargerDirectory};
pub use normalizer::Normalizer;
pub use record::{CatalogPage, GeoPoint, RawFields, RawRecord, RecordEnvelope};
