//! SQL formatter support.
//!
//! Databases quote identifiers differently. A [`Formatter`] turns table and
//! field descriptors into dialect-quoted text. One formatter is chosen per
//! query and passed in explicitly; nothing here is global.

mod ansi;
mod bracket;

pub use ansi::AnsiFormatter;
pub use bracket::BracketFormatter;

use crate::schema::{FieldDescriptor, Table};

/// Trait for dialect-specific rendering of descriptors.
///
/// Only [`Formatter::quote_identifier`] is required; the remaining methods
/// build on it and may be overridden for dialects that need something else.
pub trait Formatter: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Quotes a single identifier.
    fn quote_identifier(&self, name: &str) -> String;

    /// Renders `[schema].[name]`, or `[name]` when the table has no schema.
    fn format_table(&self, table: &Table) -> String {
        match table.schema() {
            Some(schema) => format!(
                "{}.{}",
                self.quote_identifier(schema),
                self.quote_identifier(table.name())
            ),
            None => self.quote_identifier(table.name()),
        }
    }

    /// Renders a field qualified by its table alias, or by the full table
    /// name when the table has no alias.
    fn format_field(&self, field: &FieldDescriptor) -> String {
        let table = field.table();
        let qualifier = match table.alias() {
            Some(alias) => self.quote_identifier(alias),
            None => self.format_table(table),
        };
        format!("{qualifier}.{}", self.quote_identifier(field.name()))
    }

    /// Renders a field for a SELECT list, appending ` AS [alias]` when the
    /// field is aliased.
    fn format_select_field(&self, field: &FieldDescriptor) -> String {
        let mut out = self.format_field(field);
        if let Some(alias) = field.alias() {
            out.push_str(" AS ");
            out.push_str(&self.quote_identifier(alias));
        }
        out
    }

    /// Renders a table for a FROM or JOIN list, appending ` AS [alias]` when
    /// the table is aliased.
    fn format_from_table(&self, table: &Table) -> String {
        let mut out = self.format_table(table);
        if let Some(alias) = table.alias() {
            out.push_str(" AS ");
            out.push_str(&self.quote_identifier(alias));
        }
        out
    }

    /// Renders an ORDER BY item.
    fn format_order_by(&self, field: &FieldDescriptor, descending: bool) -> String {
        let direction = if descending { "DESC" } else { "ASC" };
        format!("{} {direction}", self.format_field(field))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::schema::ValueType;

    fn id_field(table: Table) -> FieldDescriptor {
        FieldDescriptor::new(Arc::new(table), "Id", ValueType::Int)
    }

    #[test]
    fn test_format_table_with_and_without_schema() {
        let f = BracketFormatter::new();
        assert_eq!(
            f.format_table(&Table::new("Blogs").with_schema("dbo")),
            "[dbo].[Blogs]"
        );
        assert_eq!(f.format_table(&Table::new("Blogs")), "[Blogs]");
    }

    #[test]
    fn test_format_field_uses_table_alias_as_qualifier() {
        let f = BracketFormatter::new();
        let plain = id_field(Table::new("Blogs").with_schema("dbo"));
        let aliased = id_field(Table::new("Blogs").with_schema("dbo").with_alias("b"));
        assert_eq!(f.format_field(&plain), "[dbo].[Blogs].[Id]");
        assert_eq!(f.format_field(&aliased), "[b].[Id]");
    }

    #[test]
    fn test_select_alias_is_separated_by_space() {
        let f = BracketFormatter::new();
        let field = id_field(Table::new("Blogs").with_schema("dbo")).with_alias("BlogId");
        assert_eq!(f.format_select_field(&field), "[dbo].[Blogs].[Id] AS [BlogId]");
        // Outside the SELECT list the alias is not rendered.
        assert_eq!(f.format_field(&field), "[dbo].[Blogs].[Id]");
    }

    #[test]
    fn test_from_table_alias() {
        let f = BracketFormatter::new();
        let table = Table::new("Blogs").with_schema("dbo").with_alias("b");
        assert_eq!(f.format_from_table(&table), "[dbo].[Blogs] AS [b]");
    }

    #[test]
    fn test_order_by_direction() {
        let f = BracketFormatter::new();
        let field = id_field(Table::new("Blogs"));
        assert_eq!(f.format_order_by(&field, false), "[Blogs].[Id] ASC");
        assert_eq!(f.format_order_by(&field, true), "[Blogs].[Id] DESC");
    }
}
