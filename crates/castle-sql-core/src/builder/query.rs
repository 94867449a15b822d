//! SELECT query assembly using the typestate pattern.
//!
//! A query always starts with its SELECT list. FROM and WHERE can each be
//! set at most once; calling either twice does not compile.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::trace;

use super::expr::WhereExpression;
use super::from::FromClause;
use super::join::{JoinExpression, JoinKind};
use super::order_by::{OrderByClause, OrderByExpression};
use super::select::SelectClause;
use super::where_clause::WhereClause;
use crate::dialect::{BracketFormatter, Formatter};
use crate::schema::{FieldDescriptor, Table, TableDescriptor};

// Typestate markers (zero-sized types)

/// Marker: No FROM clause specified yet.
#[derive(Debug, Clone, Copy)]
pub struct NoFrom;
/// Marker: FROM clause has been specified.
#[derive(Debug, Clone, Copy)]
pub struct HasFrom;
/// Marker: No WHERE clause specified yet.
#[derive(Debug, Clone, Copy)]
pub struct NoWhere;
/// Marker: WHERE clause has been specified.
#[derive(Debug, Clone, Copy)]
pub struct HasWhere;

/// Entry point that binds a formatter to the queries it starts.
#[derive(Clone)]
pub struct SqlQuery {
    formatter: Arc<dyn Formatter>,
}

impl SqlQuery {
    /// Creates an entry point using `formatter` for every query it starts.
    #[must_use]
    pub fn new(formatter: Arc<dyn Formatter>) -> Self {
        Self { formatter }
    }

    /// Returns the bound formatter.
    #[must_use]
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Starts a query selecting `fields` in order.
    #[must_use]
    pub fn select<'a>(
        &self,
        fields: impl IntoIterator<Item = &'a FieldDescriptor>,
    ) -> SqlSelectQuery<NoFrom, NoWhere> {
        self.select_clause(fields.into_iter().collect())
    }

    /// Starts a query selecting every column of `table`.
    #[must_use]
    pub fn select_all(&self, table: &TableDescriptor) -> SqlSelectQuery<NoFrom, NoWhere> {
        self.select(table.fields())
    }

    /// Starts a query from a prepared SELECT clause.
    #[must_use]
    pub fn select_clause(&self, select: SelectClause) -> SqlSelectQuery<NoFrom, NoWhere> {
        SqlSelectQuery {
            formatter: Arc::clone(&self.formatter),
            select,
            from: None,
            where_clause: None,
            order_by: OrderByClause::new(),
            _state: PhantomData,
        }
    }
}

impl Default for SqlQuery {
    fn default() -> Self {
        Self::new(Arc::new(BracketFormatter::new()))
    }
}

impl fmt::Debug for SqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlQuery")
            .field("formatter", &self.formatter.name())
            .finish()
    }
}

/// A SELECT statement under construction.
///
/// Render order is fixed: SELECT, FROM, WHERE, ORDER BY. Only the clauses
/// that were set are rendered.
#[derive(Clone)]
pub struct SqlSelectQuery<From = NoFrom, Where = NoWhere> {
    formatter: Arc<dyn Formatter>,
    select: SelectClause,
    from: Option<FromClause>,
    where_clause: Option<WhereClause>,
    order_by: OrderByClause,
    _state: PhantomData<(From, Where)>,
}

// Transition: NoFrom -> HasFrom
impl<Where> SqlSelectQuery<NoFrom, Where> {
    /// Sets the FROM table.
    #[must_use]
    pub fn from(self, table: &Arc<Table>) -> SqlSelectQuery<HasFrom, Where> {
        self.from_clause(FromClause::new(table))
    }

    /// Sets a prepared FROM clause.
    #[must_use]
    pub fn from_clause(self, from: FromClause) -> SqlSelectQuery<HasFrom, Where> {
        SqlSelectQuery {
            formatter: self.formatter,
            select: self.select,
            from: Some(from),
            where_clause: self.where_clause,
            order_by: self.order_by,
            _state: PhantomData,
        }
    }
}

// Joins attach to an existing FROM
impl<Where> SqlSelectQuery<HasFrom, Where> {
    /// Appends a prepared join.
    #[must_use]
    pub fn join_expr(mut self, join: JoinExpression) -> Self {
        if let Some(from) = self.from.as_mut() {
            from.push(join);
        }
        self
    }

    /// Adds an inner JOIN.
    #[must_use]
    pub fn join(self, table: &Arc<Table>, on: WhereExpression) -> Self {
        self.join_expr(JoinExpression::with_kind(JoinKind::Inner, table, on))
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: &Arc<Table>, on: WhereExpression) -> Self {
        self.join_expr(JoinExpression::with_kind(JoinKind::Left, table, on))
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: &Arc<Table>, on: WhereExpression) -> Self {
        self.join_expr(JoinExpression::with_kind(JoinKind::Right, table, on))
    }

    /// Adds a FULL JOIN.
    #[must_use]
    pub fn full_join(self, table: &Arc<Table>, on: WhereExpression) -> Self {
        self.join_expr(JoinExpression::with_kind(JoinKind::Full, table, on))
    }
}

// Transition: NoWhere -> HasWhere
impl<From> SqlSelectQuery<From, NoWhere> {
    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(self, condition: WhereExpression) -> SqlSelectQuery<From, HasWhere> {
        SqlSelectQuery {
            formatter: self.formatter,
            select: self.select,
            from: self.from,
            where_clause: Some(WhereClause::new(condition)),
            order_by: self.order_by,
            _state: PhantomData,
        }
    }
}

impl<From, Where> SqlSelectQuery<From, Where> {
    /// Appends an ORDER BY item.
    #[must_use]
    pub fn order_by(mut self, item: OrderByExpression) -> Self {
        self.order_by.push(item);
        self
    }

    /// Returns the formatter used for rendering.
    #[must_use]
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }

    /// Returns the SELECT clause.
    #[must_use]
    pub const fn select(&self) -> &SelectClause {
        &self.select
    }

    /// Returns the FROM clause, if set.
    #[must_use]
    pub const fn from_ref(&self) -> Option<&FromClause> {
        self.from.as_ref()
    }

    /// Returns the WHERE clause, if set.
    #[must_use]
    pub const fn where_ref(&self) -> Option<&WhereClause> {
        self.where_clause.as_ref()
    }

    /// Renders the complete statement.
    #[must_use]
    pub fn to_sql(&self) -> String {
        let formatter = self.formatter.as_ref();
        trace!(
            formatter = formatter.name(),
            fields = self.select.fields().len(),
            has_from = self.from.is_some(),
            has_where = self.where_clause.is_some(),
            "Rendering select query"
        );

        let mut sql = self.select.render(formatter);
        if let Some(from) = &self.from {
            sql.push_str(&from.render(formatter));
            sql.push('\n');
        }
        if let Some(where_clause) = &self.where_clause {
            sql.push_str(&where_clause.render(formatter));
        }
        sql.push_str(&self.order_by.render(formatter));
        sql
    }
}

impl<From, Where> fmt::Display for SqlSelectQuery<From, Where> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl<From, Where> fmt::Debug for SqlSelectQuery<From, Where> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlSelectQuery")
            .field("formatter", &self.formatter.name())
            .field("select", &self.select)
            .field("from", &self.from)
            .field("where_clause", &self.where_clause)
            .field("order_by", &self.order_by)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::AnsiFormatter;
    use crate::schema::ValueType;

    fn blogs() -> TableDescriptor {
        TableDescriptor::new(Table::new("Blogs").with_schema("dbo"))
            .column("Id", ValueType::Int)
            .unwrap()
            .column("Name", ValueType::Text)
            .unwrap()
    }

    #[test]
    fn test_select_only() {
        let blogs = blogs();
        let sql = SqlQuery::default().select_all(&blogs).to_sql();
        assert_eq!(
            sql,
            "SELECT\n\t\t\t\t[dbo].[Blogs].[Id],\n\t\t\t\t[dbo].[Blogs].[Name]\n"
        );
    }

    #[test]
    fn test_where_without_from() {
        let blogs = blogs();
        let id = blogs.field("Id").unwrap();
        let sql = SqlQuery::default()
            .select([id])
            .where_clause(id.eq(3))
            .to_sql();
        assert_eq!(
            sql,
            "SELECT\n\t\t\t\t[dbo].[Blogs].[Id]\nWHERE\n\t\t\t\t[dbo].[Blogs].[Id] = 3\n"
        );
    }

    #[test]
    fn test_order_by_renders_last() {
        let blogs = blogs();
        let id = blogs.field("Id").unwrap();
        let name = blogs.field("Name").unwrap();
        let sql = SqlQuery::default()
            .select([name])
            .order_by(name.asc())
            .from(blogs.table())
            .where_clause(id.gt(1))
            .to_sql();
        assert_eq!(
            sql,
            "SELECT\n\t\t\t\t[dbo].[Blogs].[Name]\n\
             FROM [dbo].[Blogs] \n\
             WHERE\n\t\t\t\t[dbo].[Blogs].[Id] > 1\n\
             ORDER BY\n\t\t\t\t[dbo].[Blogs].[Name] ASC\n"
        );
    }

    #[test]
    fn test_display_matches_to_sql() {
        let blogs = blogs();
        let query = SqlQuery::default().select_all(&blogs).from(blogs.table());
        assert_eq!(query.to_string(), query.to_sql());
    }

    #[test]
    fn test_formatter_is_injected() {
        let blogs = blogs();
        let sql = SqlQuery::new(Arc::new(AnsiFormatter::new()))
            .select_all(&blogs)
            .from(blogs.table())
            .to_sql();
        assert!(sql.contains("\"dbo\".\"Blogs\".\"Id\""));
        assert!(sql.contains("FROM \"dbo\".\"Blogs\" \n"));
    }

    #[test]
    fn test_query_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqlSelectQuery<HasFrom, HasWhere>>();
        assert_send_sync::<SqlQuery>();
    }

    // This would fail to compile: FROM set twice
    // #[test]
    // fn test_from_twice_fails() {
    //     let blogs = blogs();
    //     let _ = SqlQuery::default()
    //         .select_all(&blogs)
    //         .from(blogs.table())
    //         .from(blogs.table());  // Error: no method `from` on HasFrom
    // }
}
