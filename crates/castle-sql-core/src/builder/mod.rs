//! SQL clause composition.
//!
//! Expressions (where, join, order-by) are composed into clauses, and
//! clauses are assembled into a [`SqlSelectQuery`]. Every render call takes
//! the [`Formatter`](crate::dialect::Formatter) explicitly.
//!
//! # Example
//!
//! ```rust
//! use castle_sql_core::builder::SqlQuery;
//! use castle_sql_core::schema::{Table, TableDescriptor, ValueType};
//!
//! let blogs = TableDescriptor::new(Table::new("Blogs").with_schema("dbo"))
//!     .column("Id", ValueType::Int)
//!     .unwrap()
//!     .column("Name", ValueType::Text)
//!     .unwrap();
//! let id = blogs.field("Id").unwrap();
//! let name = blogs.field("Name").unwrap();
//!
//! let sql = SqlQuery::default()
//!     .select([id, name])
//!     .from(blogs.table())
//!     .to_sql();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT\n\t\t\t\t[dbo].[Blogs].[Id],\n\t\t\t\t[dbo].[Blogs].[Name]\nFROM [dbo].[Blogs] \n"
//! );
//! ```

pub mod expr;
mod from;
mod join;
mod order_by;
mod query;
mod select;
pub mod value;
mod where_clause;

pub use expr::{IntoOperand, Operand, WhereExpression};
pub use from::FromClause;
pub use join::{JoinExpression, JoinKind};
pub use order_by::{OrderByClause, OrderByExpression};
pub use query::{HasFrom, HasWhere, NoFrom, NoWhere, SqlQuery, SqlSelectQuery};
pub use select::SelectClause;
pub use value::{SqlValue, ToSqlValue};
pub use where_clause::WhereClause;

/// Leading whitespace for SELECT items, ORDER BY items and WHERE conditions.
pub const INDENT: &str = "\t\t\t\t";
