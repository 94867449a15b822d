//! JOIN fragments.

use std::sync::Arc;

use super::expr::WhereExpression;
use crate::dialect::Formatter;
use crate::schema::Table;

/// The kind of join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// `JOIN` (inner).
    #[default]
    Inner,
    /// `LEFT JOIN`.
    Left,
    /// `RIGHT JOIN`.
    Right,
    /// `FULL JOIN`.
    Full,
}

impl JoinKind {
    /// Returns the SQL keyword(s) for this join kind.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

/// A table joined on a condition.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinExpression {
    kind: JoinKind,
    table: Arc<Table>,
    on: WhereExpression,
}

impl JoinExpression {
    /// Creates an inner join.
    #[must_use]
    pub fn new(table: &Arc<Table>, on: WhereExpression) -> Self {
        Self::with_kind(JoinKind::Inner, table, on)
    }

    /// Creates a join of the given kind.
    #[must_use]
    pub fn with_kind(kind: JoinKind, table: &Arc<Table>, on: WhereExpression) -> Self {
        Self {
            kind,
            table: Arc::clone(table),
            on,
        }
    }

    /// Returns the join kind.
    #[must_use]
    pub const fn kind(&self) -> JoinKind {
        self.kind
    }

    /// Returns the joined table.
    #[must_use]
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    /// Renders `JOIN <table> ON (<condition>)`.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        format!(
            "{} {} ON ({})",
            self.kind.keyword(),
            formatter.format_from_table(&self.table),
            self.on.render(formatter)
        )
    }
}
