//! WHERE clause.

use super::expr::WhereExpression;
use crate::dialect::Formatter;

/// `WHERE` on its own line followed by the indented condition.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    condition: WhereExpression,
}

impl WhereClause {
    /// Creates a WHERE clause for `condition`.
    #[must_use]
    pub const fn new(condition: WhereExpression) -> Self {
        Self { condition }
    }

    /// Returns the condition.
    #[must_use]
    pub const fn condition(&self) -> &WhereExpression {
        &self.condition
    }

    /// Renders the clause, terminated by a newline.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        format!("WHERE\n{}\n", self.condition.render_clause(formatter))
    }
}

impl From<WhereExpression> for WhereClause {
    fn from(condition: WhereExpression) -> Self {
        Self::new(condition)
    }
}
