#![allow(dead_code)]

use castle_sql_core::{FieldDescriptor, Table, TableDescriptor, ValueType};

pub fn blogs() -> TableDescriptor {
    TableDescriptor::new(Table::new("Blogs").with_schema("dbo"))
        .column("Id", ValueType::Int)
        .and_then(|t| t.column("Name", ValueType::Text))
        .unwrap_or_else(|e| panic!("Failed to build Blogs: {e}"))
}

pub fn posts() -> TableDescriptor {
    TableDescriptor::new(Table::new("Posts").with_schema("dbo"))
        .column("Id", ValueType::Int)
        .and_then(|t| t.column("BlogId", ValueType::Int))
        .and_then(|t| t.column("Title", ValueType::Text))
        .unwrap_or_else(|e| panic!("Failed to build Posts: {e}"))
}

pub fn comments() -> TableDescriptor {
    TableDescriptor::new(Table::new("Comments").with_schema("dbo"))
        .column("Id", ValueType::Int)
        .and_then(|t| t.column("PostId", ValueType::Int))
        .unwrap_or_else(|e| panic!("Failed to build Comments: {e}"))
}

pub fn field<'a>(table: &'a TableDescriptor, name: &str) -> &'a FieldDescriptor {
    table
        .field(name)
        .unwrap_or_else(|| panic!("No column {name} on {}", table.class_name()))
}
