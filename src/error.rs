//! Error types for the partitioning core and the ingestion layer

use thiserror::Error;

/// Errors raised by the partitioning core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DivideError {
    #[error("Invalid division count: must be at least 1")]
    InvalidDivisionCount,

    #[error("Part '{part}' references category {category_id}, which is not in the category index")]
    UnknownCategory { part: String, category_id: u32 },

    #[error("Malformed super-category key '{0}': expected a ' Standard' or ' Non-Standard' suffix")]
    MalformedSuperCategoryKey(String),
}

/// Result type for partitioning operations
pub type Result<T> = std::result::Result<T, DivideError>;

/// Errors raised while turning inventory records into parts
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("No weight known for BrickLink part '{0}'")]
    MissingWeight(String),

    #[error("Invalid weight '{value}' for BrickLink part '{id}'")]
    InvalidWeight { id: String, value: String },

    #[error("Part '{part}' references unknown category {category_id}")]
    UnknownCategory { part: String, category_id: u32 },

    #[error("Duplicate category id {0} in category dataset")]
    DuplicateCategory(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
