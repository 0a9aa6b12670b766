//! Storage layer
//!
//! - [`ReservationStorage`] - durable reservation store (embedded redb)
//! - [`TableCatalog`] - read-only floor plan

pub mod catalog;
pub mod storage;

pub use catalog::{CatalogError, TableCatalog};
pub use storage::{ReservationStorage, StorageError, StorageResult};
