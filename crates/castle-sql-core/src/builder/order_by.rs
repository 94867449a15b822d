//! ORDER BY expressions and clause.

use super::INDENT;
use crate::dialect::Formatter;
use crate::schema::FieldDescriptor;

/// A field plus a sort direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByExpression {
    field: FieldDescriptor,
    descending: bool,
}

impl OrderByExpression {
    /// Sorts ascending on `field`.
    #[must_use]
    pub fn asc(field: &FieldDescriptor) -> Self {
        Self {
            field: field.clone(),
            descending: false,
        }
    }

    /// Sorts descending on `field`.
    #[must_use]
    pub fn desc(field: &FieldDescriptor) -> Self {
        Self {
            field: field.clone(),
            descending: true,
        }
    }

    /// Returns the sorted field.
    #[must_use]
    pub const fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    /// Returns true for descending order.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        self.descending
    }

    /// Renders `<field> ASC` or `<field> DESC`.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        formatter.format_order_by(&self.field, self.descending)
    }
}

impl FieldDescriptor {
    /// Ascending sort on this field.
    #[must_use]
    pub fn asc(&self) -> OrderByExpression {
        OrderByExpression::asc(self)
    }

    /// Descending sort on this field.
    #[must_use]
    pub fn desc(&self) -> OrderByExpression {
        OrderByExpression::desc(self)
    }
}

/// `ORDER BY` followed by one indented item per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderByClause {
    items: Vec<OrderByExpression>,
}

impl OrderByClause {
    /// Creates an empty clause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item.
    pub fn push(&mut self, item: OrderByExpression) {
        self.items.push(item);
    }

    /// Returns the items in order.
    #[must_use]
    pub fn items(&self) -> &[OrderByExpression] {
        &self.items
    }

    /// Returns true if no items were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the clause. An empty clause renders as the empty string.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        let items: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{INDENT}{}", item.render(formatter)))
            .collect();
        format!("ORDER BY\n{}\n", items.join(",\n"))
    }
}

impl FromIterator<OrderByExpression> for OrderByClause {
    fn from_iter<I: IntoIterator<Item = OrderByExpression>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
