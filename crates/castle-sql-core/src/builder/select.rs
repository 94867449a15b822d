//! SELECT clause.

use super::INDENT;
use crate::dialect::Formatter;
use crate::schema::FieldDescriptor;

/// `SELECT` followed by one indented field per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectClause {
    fields: Vec<FieldDescriptor>,
}

impl SelectClause {
    /// Creates an empty select list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: &FieldDescriptor) -> Self {
        self.fields.push(field.clone());
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, field: &FieldDescriptor) {
        self.fields.push(field.clone());
    }

    /// Returns the selected fields in order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Renders the clause, terminated by a newline.
    ///
    /// An empty select list renders a single `*`.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        if self.fields.is_empty() {
            return format!("SELECT\n{INDENT}*\n");
        }
        let lines: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("{INDENT}{}", formatter.format_select_field(field)))
            .collect();
        format!("SELECT\n{}\n", lines.join(",\n"))
    }
}

impl<'a> FromIterator<&'a FieldDescriptor> for SelectClause {
    fn from_iter<I: IntoIterator<Item = &'a FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().cloned().collect(),
        }
    }
}

impl FromIterator<FieldDescriptor> for SelectClause {
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
