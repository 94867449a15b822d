//! Rust source emission for generated tables.
//!
//! Produces one unit struct per table with a `table()` constructor and one
//! function per column returning its [`FieldDescriptor`]. Writing the
//! output to disk is left to the caller.
//!
//! [`FieldDescriptor`]: castle_sql_core::FieldDescriptor

use std::collections::HashSet;

use castle_sql_core::schema::sanitize_identifier;
use castle_sql_core::ValueType;

use crate::options::GeneratorOptions;
use crate::processor::{GeneratedColumn, GeneratedTable};

/// First line of every emitted module.
pub const GENERATED_HEADER: &str = "// @generated by castle-sql-codegen. Do not edit.";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Type names the emitted code refers to; a struct with one of these names
/// would shadow it inside its own `impl`.
const IMPORTED_TYPES: &[&str] = &[
    "Arc",
    "FieldDescriptor",
    "OnceLock",
    "String",
    "Table",
    "ValueType",
];

/// Renders a Rust module declaring every table in `tables`.
#[must_use]
pub fn emit_module(tables: &[GeneratedTable], options: &GeneratorOptions) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');
    if let Some(doc) = &options.module_doc {
        for line in doc.lines() {
            if line.is_empty() {
                out.push_str("//!\n");
            } else {
                out.push_str(&format!("//! {line}\n"));
            }
        }
    }
    out.push('\n');
    out.push_str("use std::sync::{Arc, OnceLock};\n\n");
    out.push_str(&format!(
        "use {}::{{FieldDescriptor, Table, ValueType}};\n",
        options.core_crate
    ));

    let mut struct_names = HashSet::new();
    for table in tables {
        out.push('\n');
        let struct_name = unique(type_ident(table.descriptor.class_name()), &mut struct_names);
        emit_table(&mut out, &struct_name, table);
    }
    out
}

fn emit_table(out: &mut String, struct_name: &str, table: &GeneratedTable) {
    let source = table.descriptor.table();

    out.push_str(&format!("/// Descriptors for `{}`.\n", source.qualified_name()));
    if struct_name.contains('_') {
        out.push_str("#[allow(non_camel_case_types)]\n");
    }
    out.push_str(&format!("pub struct {struct_name};\n\n"));
    out.push_str(&format!("impl {struct_name} {{\n"));
    out.push_str("    /// Returns the table reference shared by every field.\n");
    out.push_str("    #[must_use]\n");
    out.push_str("    pub fn table() -> Arc<Table> {\n");
    out.push_str("        static TABLE: OnceLock<Arc<Table>> = OnceLock::new();\n");
    let init = match source.schema() {
        Some(schema) => format!(
            "Table::new({:?}).with_schema({schema:?})",
            source.name()
        ),
        None => format!("Table::new({:?})", source.name()),
    };
    out.push_str(&format!(
        "        Arc::clone(TABLE.get_or_init(|| Arc::new({init})))\n"
    ));
    out.push_str("    }\n");

    let mut used = HashSet::new();
    for column in &table.columns {
        out.push('\n');
        emit_column(out, column, &mut used);
    }
    out.push_str("}\n");
}

fn emit_column(out: &mut String, column: &GeneratedColumn, used: &mut HashSet<String>) {
    let field = &column.field;
    let fn_name = unique(fn_ident(field.name()), used);
    let null = if column.nullable { "null" } else { "not null" };

    out.push_str(&format!(
        "    /// `{}` ({}, {null}).\n",
        field.name(),
        column.data_type
    ));
    out.push_str("    #[must_use]\n");
    out.push_str(&format!("    pub fn {fn_name}() -> FieldDescriptor {{\n"));
    out.push_str(&format!(
        "        FieldDescriptor::new(Self::table(), {:?}, {})\n",
        field.name(),
        value_type_expr(field.value_type())
    ));
    out.push_str("    }\n");
}

fn value_type_expr(value_type: &ValueType) -> String {
    match value_type {
        ValueType::Other(name) => format!("ValueType::Other(String::from({name:?}))"),
        other => format!("ValueType::{other}"),
    }
}

fn type_ident(class_name: &str) -> String {
    let mut ident = sanitize_identifier(class_name);
    if ident.is_empty() || ident == "_" {
        ident.push_str("Table");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if KEYWORDS.contains(&ident.as_str()) || IMPORTED_TYPES.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

fn fn_ident(column: &str) -> String {
    let mut ident = sanitize_identifier(&column.to_lowercase());
    if ident.is_empty() || ident == "_" {
        ident = String::from("_col");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    // `table` is taken by the generated constructor.
    if KEYWORDS.contains(&ident.as_str()) || ident == "table" {
        ident.push('_');
    }
    ident
}

fn unique(ident: String, used: &mut HashSet<String>) -> String {
    if used.insert(ident.clone()) {
        return ident;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{ident}_{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_ident() {
        assert_eq!(fn_ident("BlogId"), "blogid");
        assert_eq!(fn_ident("Order Date"), "order_date");
        assert_eq!(fn_ident("Type"), "type_");
        assert_eq!(fn_ident("table"), "table_");
        assert_eq!(fn_ident("1st"), "_1st");
        assert_eq!(fn_ident("_"), "_col");
        assert_eq!(fn_ident("-"), "_col");
        assert_eq!(fn_ident(""), "_col");
        assert_eq!(fn_ident("__"), "__");
    }

    #[test]
    fn test_type_ident() {
        assert_eq!(type_ident("dbo_Blogs"), "dbo_Blogs");
        assert_eq!(type_ident("2019_Sales"), "_2019_Sales");
        assert_eq!(type_ident("type"), "type_");
        assert_eq!(type_ident("Self"), "Self_");
        assert_eq!(type_ident("-"), "_Table");
    }

    #[test]
    fn test_type_ident_avoids_imported_names() {
        for name in IMPORTED_TYPES {
            assert_eq!(type_ident(name), format!("{name}_"));
        }
    }

    #[test]
    fn test_unique_suffixes_collisions() {
        let mut used = HashSet::new();
        assert_eq!(unique(String::from("a_b"), &mut used), "a_b");
        assert_eq!(unique(String::from("a_b"), &mut used), "a_b_2");
        assert_eq!(unique(String::from("a_b"), &mut used), "a_b_3");
    }

    #[test]
    fn test_value_type_expr() {
        assert_eq!(value_type_expr(&ValueType::Int), "ValueType::Int");
        assert_eq!(
            value_type_expr(&ValueType::Other(String::from("xml\"ish"))),
            "ValueType::Other(String::from(\"xml\\\"ish\"))"
        );
    }
}
