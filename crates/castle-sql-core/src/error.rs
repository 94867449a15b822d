//! Error types for descriptor construction.

/// Errors raised while building table and field descriptors.
///
/// Rendering itself never fails; every error here is a construction-time
/// validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// A column with the same name (ignoring case) already exists on the table.
    #[error("Duplicate column '{column}' on table '{table}'")]
    DuplicateColumn {
        /// Qualified table name.
        table: String,
        /// The offending column name.
        column: String,
    },
}

/// Result type for descriptor construction.
pub type Result<T> = std::result::Result<T, SqlError>;
