//! Table and field descriptors.
//!
//! Descriptors are immutable value objects that identify a table or a
//! column for rendering purposes. They carry no connection to a live
//! database.
//!
//! ```rust
//! use castle_sql_core::schema::{Table, TableDescriptor, ValueType};
//!
//! let blogs = TableDescriptor::new(Table::new("Blogs").with_schema("dbo"))
//!     .column("Id", ValueType::Int)
//!     .unwrap()
//!     .column("Name", ValueType::Text)
//!     .unwrap();
//!
//! assert_eq!(blogs.class_name(), "dbo_Blogs");
//! assert!(blogs.field("name").is_some());
//! ```

mod types;

use std::sync::Arc;

use tracing::debug;

pub use types::ValueType;

use crate::error::{Result, SqlError};

/// A schema-qualified table reference with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    schema: Option<String>,
    name: String,
    alias: Option<String>,
}

impl Table {
    /// Creates a table reference without schema or alias.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Sets the owning schema.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets the alias used in FROM lists and as the field qualifier.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Returns the schema, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the unquoted `schema.name` form, used in messages.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// A table-qualified column with an optional alias and declared value type.
///
/// The table is shared, not owned: every field of a table points at the
/// same [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    table: Arc<Table>,
    name: String,
    alias: Option<String>,
    value_type: ValueType,
}

impl FieldDescriptor {
    /// Creates a field on the given table.
    #[must_use]
    pub fn new(table: Arc<Table>, name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            table,
            name: name.into(),
            alias: None,
            value_type,
        }
    }

    /// Returns a copy of this field carrying a SELECT-list alias.
    #[must_use]
    pub fn with_alias(&self, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..self.clone()
        }
    }

    /// Returns the owning table.
    #[must_use]
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alias, if any.
    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the declared value type.
    #[must_use]
    pub const fn value_type(&self) -> &ValueType {
        &self.value_type
    }
}

/// A table together with its columns and a derived class name.
///
/// Column names are unique per table, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor {
    table: Arc<Table>,
    class_name: String,
    columns: Vec<FieldDescriptor>,
}

impl TableDescriptor {
    /// Creates a descriptor with no columns.
    ///
    /// The class name defaults to `schema_name` (or just `name` when there is
    /// no schema), sanitized by [`sanitize_identifier`].
    #[must_use]
    pub fn new(table: Table) -> Self {
        let class_name = match table.schema() {
            Some(schema) => sanitize_identifier(&format!("{schema}_{}", table.name())),
            None => sanitize_identifier(table.name()),
        };
        Self {
            table: Arc::new(table),
            class_name,
            columns: vec![],
        }
    }

    /// Overrides the class name. The name is sanitized.
    #[must_use]
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = sanitize_identifier(class_name);
        self
    }

    /// Adds a column, failing if one with the same name already exists.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
    ) -> Result<&FieldDescriptor> {
        let name = name.into();
        if self.field(&name).is_some() {
            return Err(SqlError::DuplicateColumn {
                table: self.table.qualified_name(),
                column: name,
            });
        }
        debug!(table = %self.table.qualified_name(), column = %name, %value_type, "Adding column");
        let index = self.columns.len();
        self.columns
            .push(FieldDescriptor::new(Arc::clone(&self.table), name, value_type));
        Ok(&self.columns[index])
    }

    /// Adds a column, consuming and returning the descriptor.
    pub fn column(mut self, name: impl Into<String>, value_type: ValueType) -> Result<Self> {
        self.add_column(name, value_type)?;
        Ok(self)
    }

    /// Returns the shared table reference.
    #[must_use]
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Returns the sanitized class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the columns in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.columns
    }

    /// Looks up a column by name, ignoring case.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        let wanted = name.to_lowercase();
        self.columns
            .iter()
            .find(|field| field.name().to_lowercase() == wanted)
    }

    /// Returns a copy bound to an aliased table.
    ///
    /// Every column is rebound so that fields taken from the copy render
    /// with the alias as their qualifier.
    #[must_use]
    pub fn aliased(&self, alias: impl Into<String>) -> Self {
        let table = Arc::new(self.table.as_ref().clone().with_alias(alias));
        let columns = self
            .columns
            .iter()
            .map(|field| FieldDescriptor {
                table: Arc::clone(&table),
                ..field.clone()
            })
            .collect();
        Self {
            table,
            class_name: self.class_name.clone(),
            columns,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Replaces every character outside `[A-Za-z0-9_]` with `_`.
#[must_use]
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blogs() -> TableDescriptor {
        TableDescriptor::new(Table::new("Blogs").with_schema("dbo"))
    }

    #[test]
    fn test_class_name_derivation() {
        assert_eq!(blogs().class_name(), "dbo_Blogs");
        assert_eq!(
            TableDescriptor::new(Table::new("Order Details")).class_name(),
            "Order_Details"
        );
        assert_eq!(
            blogs().with_class_name("my-blogs.v2").class_name(),
            "my_blogs_v2"
        );
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("abc_XYZ_09"), "abc_XYZ_09");
        assert_eq!(sanitize_identifier("a b-c.d$e"), "a_b_c_d_e");
        assert_eq!(sanitize_identifier("é"), "_");
    }

    #[test]
    fn test_duplicate_column_rejected_ignoring_case() {
        let mut table = blogs();
        table.add_column("Id", ValueType::Int).unwrap();
        let err = table.add_column("ID", ValueType::Int).unwrap_err();
        assert_eq!(
            err,
            SqlError::DuplicateColumn {
                table: String::from("dbo.Blogs"),
                column: String::from("ID"),
            }
        );
        assert_eq!(err.to_string(), "Duplicate column 'ID' on table 'dbo.Blogs'");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_fields_share_table() {
        let table = blogs()
            .column("Id", ValueType::Int)
            .unwrap()
            .column("Name", ValueType::Text)
            .unwrap();
        let id = table.field("id").unwrap();
        let name = table.field("NAME").unwrap();
        assert!(Arc::ptr_eq(id.table(), name.table()));
        assert_eq!(name.value_type(), &ValueType::Text);
    }

    #[test]
    fn test_aliased_rebinds_columns() {
        let table = blogs().column("Id", ValueType::Int).unwrap();
        let aliased = table.aliased("b");
        assert_eq!(aliased.table().alias(), Some("b"));
        assert_eq!(aliased.fields()[0].table().alias(), Some("b"));
        assert_eq!(table.fields()[0].table().alias(), None);
    }

    #[test]
    fn test_field_alias_does_not_touch_original() {
        let table = blogs().column("Id", ValueType::Int).unwrap();
        let id = table.field("Id").unwrap();
        let aliased = id.with_alias("BlogId");
        assert_eq!(aliased.alias(), Some("BlogId"));
        assert_eq!(id.alias(), None);
    }
}
