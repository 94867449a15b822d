//! FROM clause with left-nested joins.

use std::sync::Arc;

use super::join::JoinExpression;
use crate::dialect::Formatter;
use crate::schema::Table;

/// A base table plus an ordered list of joins.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    table: Arc<Table>,
    joins: Vec<JoinExpression>,
}

impl FromClause {
    /// Creates a FROM clause over `table` with no joins.
    #[must_use]
    pub fn new(table: &Arc<Table>) -> Self {
        Self {
            table: Arc::clone(table),
            joins: vec![],
        }
    }

    /// Appends a join.
    #[must_use]
    pub fn join(mut self, join: JoinExpression) -> Self {
        self.joins.push(join);
        self
    }

    /// Appends a join in place.
    pub fn push(&mut self, join: JoinExpression) {
        self.joins.push(join);
    }

    /// Returns the base table.
    #[must_use]
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Returns the joins in order.
    #[must_use]
    pub fn joins(&self) -> &[JoinExpression] {
        &self.joins
    }

    /// Renders `FROM <table> ` with every join wrapped around the text
    /// accumulated so far.
    ///
    /// Each join inserts `(` at the front, then appends ` <join>)`, so two
    /// joins give `FROM ((t JOIN a ON (..)) JOIN b ON (..)) `.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        let mut from = formatter.format_from_table(&self.table);
        for join in &self.joins {
            from.insert(0, '(');
            from.push(' ');
            from.push_str(&join.render(formatter));
            from.push(')');
        }
        format!("FROM {from} ")
    }
}
