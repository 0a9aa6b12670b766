use thiserror::Error;

use crate::db::{CatalogError, StorageError};

/// Startup/runtime errors for the server itself
///
/// Request-level failures use `utils::AppError`; this type covers what can
/// go wrong before or outside request handling.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Table catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
