#![allow(dead_code)]

use castle_sql_codegen::prelude::*;

/// A catalog dump as a schema reader would produce it.
pub const BLOG_CATALOG: &str = r#"[
    {"schema": "dbo", "table": "Blogs", "column": "Id", "data_type": "int", "nullable": false},
    {"schema": "dbo", "table": "Blogs", "column": "Name", "data_type": "nvarchar(100)", "nullable": true},
    {"schema": "dbo", "table": "Posts", "column": "Id", "data_type": "int", "nullable": false},
    {"schema": "dbo", "table": "Posts", "column": "BlogId", "data_type": "int", "nullable": false},
    {"schema": "dbo", "table": "Posts", "column": "Title", "data_type": "nvarchar(200)", "nullable": true},
    {"schema": "audit", "table": "Posts", "column": "ChangedAt", "data_type": "datetime2", "nullable": false}
]"#;

pub fn catalog() -> Vec<ColumnMetadata> {
    parse_metadata_json(BLOG_CATALOG)
        .unwrap_or_else(|e| panic!("Failed to parse catalog fixture: {e}"))
}

pub fn process(records: &[ColumnMetadata], options: GeneratorOptions) -> Vec<GeneratedTable> {
    MetadataProcessor::with_options(options)
        .process(records)
        .unwrap_or_else(|e| panic!("Failed to process catalog: {e}"))
}

pub fn table<'a>(tables: &'a [GeneratedTable], class_name: &str) -> &'a GeneratedTable {
    tables
        .iter()
        .find(|t| t.class_name() == class_name)
        .unwrap_or_else(|| panic!("No generated table {class_name}"))
}
