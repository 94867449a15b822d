//! Descriptor generation from database catalog metadata.
//!
//! `castle-sql-codegen` turns a flat list of `(schema, table, column, type,
//! nullable)` records into table descriptors for `castle-sql-core`, and can
//! render them as Rust source.
//!
//! - **Metadata** - catalog column records, optionally read from JSON
//! - **Processor** - groups records into one descriptor per class name
//! - **Emitter** - renders generated tables as a Rust module
//! - **Options** - class naming and emitted-code settings
//!
//! Reading the catalog and writing files are left to the caller.
//!
//! # Example
//!
//! ```rust
//! use castle_sql_codegen::prelude::*;
//!
//! let records = vec![
//!     ColumnMetadata::new("dbo", "Blogs", "Id", "int", false),
//!     ColumnMetadata::new("dbo", "Blogs", "Name", "nvarchar", true),
//! ];
//!
//! let tables = MetadataProcessor::new().process(&records).unwrap();
//! assert_eq!(tables[0].class_name(), "dbo_Blogs");
//!
//! let source = emit_module(&tables, &GeneratorOptions::default());
//! assert!(source.contains("pub struct dbo_Blogs;"));
//! ```

pub mod emitter;
pub mod error;
pub mod metadata;
pub mod options;
pub mod processor;

pub use error::{GenerateError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::emitter::emit_module;
    pub use crate::error::{GenerateError, Result};
    pub use crate::metadata::{parse_metadata_json, ColumnMetadata};
    pub use crate::options::GeneratorOptions;
    pub use crate::processor::{
        class_name_for, GeneratedColumn, GeneratedTable, MetadataProcessor,
    };
}

/// Processes `records` and renders the result as a Rust module.
///
/// # Errors
///
/// Propagates any error from [`processor::MetadataProcessor::process`].
pub fn generate(
    records: &[metadata::ColumnMetadata],
    options: &options::GeneratorOptions,
) -> Result<String> {
    let tables = processor::MetadataProcessor::with_options(options.clone()).process(records)?;
    Ok(emitter::emit_module(&tables, options))
}
