//! Catalog metadata records.
//!
//! A catalog reader (outside this crate) supplies one record per column.
//! Records arrive in catalog order and are consumed in that order.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One column as reported by a database catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Owning schema (e.g. `dbo`).
    pub schema: String,
    /// Table name.
    pub table: String,
    /// Column name.
    pub column: String,
    /// Catalog type name (e.g. `nvarchar`).
    pub data_type: String,
    /// Whether the column accepts NULL.
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnMetadata {
    /// Creates a record.
    #[must_use]
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
        data_type: impl Into<String>,
        nullable: bool,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            column: column.into(),
            data_type: data_type.into(),
            nullable,
        }
    }
}

/// Parses a JSON array of column records.
///
/// # Errors
///
/// Returns [`GenerateError::Metadata`](crate::GenerateError::Metadata) if the
/// input is not a JSON array of records.
pub fn parse_metadata_json(input: &str) -> Result<Vec<ColumnMetadata>> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenerateError;

    #[test]
    fn test_parse_metadata_json() {
        let records = parse_metadata_json(
            r#"[
                {"schema": "dbo", "table": "Blogs", "column": "Id", "data_type": "int", "nullable": false},
                {"schema": "dbo", "table": "Blogs", "column": "Name", "data_type": "nvarchar"}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            ColumnMetadata::new("dbo", "Blogs", "Id", "int", false)
        );
        assert!(!records[1].nullable);
    }

    #[test]
    fn test_parse_metadata_json_rejects_missing_fields() {
        let err = parse_metadata_json(r#"[{"schema": "dbo"}]"#).unwrap_err();
        assert!(matches!(err, GenerateError::Metadata(_)));
    }
}
