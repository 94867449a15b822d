//! # castle-sql-core
//!
//! A composable SQL SELECT builder over typed table and field descriptors.
//!
//! This crate provides:
//! - Immutable [`Table`] / [`FieldDescriptor`] / [`TableDescriptor`] values
//! - Where, join and order-by expressions composed into clauses
//! - A [`SqlSelectQuery`] that renders clauses in a fixed order
//! - Swappable [`Formatter`]s for dialect-specific identifier quoting
//!
//! Nothing here executes SQL or touches a database. Rendering is a pure
//! function of the object graph and the formatter passed in.
//!
//! ## Building a query
//!
//! ```rust
//! use castle_sql_core::{eq, SqlQuery, Table, TableDescriptor, ValueType};
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
//!     .select([id])
//!     .from(blogs.table())
//!     .where_clause(eq(name, "O'Brien"))
//!     .to_sql();
//!
//! assert!(sql.ends_with("WHERE\n\t\t\t\t[dbo].[Blogs].[Name] = 'O''Brien'\n"));
//! ```

pub mod builder;
pub mod dialect;
pub mod error;
pub mod schema;

pub use builder::expr::{and, compare, eq, not_eq, or};
pub use builder::{
    JoinExpression, JoinKind, OrderByExpression, SqlQuery, SqlSelectQuery, SqlValue,
    WhereExpression,
};
pub use dialect::{AnsiFormatter, BracketFormatter, Formatter};
pub use error::{Result, SqlError};
pub use schema::{FieldDescriptor, Table, TableDescriptor, ValueType};
