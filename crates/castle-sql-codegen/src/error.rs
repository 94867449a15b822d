//! Error types for descriptor generation.

/// Errors that abort a generation run.
///
/// Every error is fatal to the run: no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The same column appears twice for one table.
    #[error("Duplicate property '{column}' on table '{table}'")]
    DuplicateProperty {
        /// Qualified table name.
        table: String,
        /// The repeated column name.
        column: String,
    },

    /// Catalog metadata could not be deserialized.
    #[error("Invalid metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    /// Generator options are unusable.
    #[error("Invalid generator options: {0}")]
    InvalidOptions(String),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
