//! Model error types

use thiserror::Error;

/// Errors raised while building a model or reading cell names
#[derive(Debug, Error)]
pub enum ModelError {
    /// Text that is not an A1-style cell name
    #[error("invalid cell name: {0:?}")]
    InvalidCellName(String),

    /// Sheet configuration with unusable values
    #[error("invalid sheet configuration: {0}")]
    InvalidConfig(String),

    /// Sheet configuration that is not valid JSON for [`crate::SheetConfig`]
    #[error("failed to read sheet configuration: {0}")]
    Json(#[from] serde_json::Error),
}
