//! Metadata processor.
//!
//! Folds a flat list of catalog column records into one table descriptor
//! per class, in a single pass. A repeated column aborts the whole run.

use std::collections::HashMap;

use castle_sql_core::schema::sanitize_identifier;
use castle_sql_core::{FieldDescriptor, SqlError, Table, TableDescriptor, ValueType};
use tracing::{debug, info, warn};

use crate::error::{GenerateError, Result};
use crate::metadata::ColumnMetadata;
use crate::options::GeneratorOptions;

/// A column of a generated table, with the catalog details the descriptor
/// itself does not keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedColumn {
    /// The field descriptor bound to the table.
    pub field: FieldDescriptor,
    /// Catalog type name as reported.
    pub data_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

/// One generated class: a table descriptor and its columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTable {
    /// The table descriptor, including its class name.
    pub descriptor: TableDescriptor,
    /// Columns in catalog order.
    pub columns: Vec<GeneratedColumn>,
}

impl GeneratedTable {
    fn new(descriptor: TableDescriptor) -> Self {
        Self {
            descriptor,
            columns: vec![],
        }
    }

    /// Returns the class name.
    #[must_use]
    pub fn class_name(&self) -> &str {
        self.descriptor.class_name()
    }
}

/// Derives a class name from a schema and table name.
#[must_use]
pub fn class_name_for(schema: &str, table: &str, include_schema: bool) -> String {
    if include_schema {
        sanitize_identifier(&format!("{schema}_{table}"))
    } else {
        sanitize_identifier(table)
    }
}

/// Groups catalog records into generated tables.
#[derive(Debug, Default)]
pub struct MetadataProcessor {
    options: GeneratorOptions,
}

impl MetadataProcessor {
    /// Creates a processor with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with custom options.
    #[must_use]
    pub const fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Processes `records` into generated tables, in first-seen order.
    ///
    /// Records are grouped by class name, compared case-insensitively; the
    /// first record of a group fixes its schema and table name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::DuplicateProperty`] naming the table and
    /// column when a column repeats within a group, or
    /// [`GenerateError::InvalidOptions`] if the options do not validate.
    pub fn process(&self, records: &[ColumnMetadata]) -> Result<Vec<GeneratedTable>> {
        self.options.validate()?;

        let mut tables: Vec<GeneratedTable> = vec![];
        let mut index_by_key: HashMap<String, usize> = HashMap::new();

        for record in records {
            let class_name = class_name_for(
                &record.schema,
                &record.table,
                self.options.include_schema_in_class_name,
            );
            let key = class_name.to_lowercase();

            let index = match index_by_key.get(&key) {
                Some(&index) => index,
                None => {
                    debug!(
                        schema = %record.schema,
                        table = %record.table,
                        class = %class_name,
                        "New table group"
                    );
                    let table = Table::new(record.table.as_str()).with_schema(record.schema.as_str());
                    let descriptor = TableDescriptor::new(table).with_class_name(&class_name);
                    tables.push(GeneratedTable::new(descriptor));
                    index_by_key.insert(key, tables.len() - 1);
                    tables.len() - 1
                }
            };

            add_column(&mut tables[index], record)?;
        }

        info!(
            tables = tables.len(),
            columns = records.len(),
            "Processed catalog metadata"
        );
        Ok(tables)
    }
}

fn add_column(table: &mut GeneratedTable, record: &ColumnMetadata) -> Result<()> {
    let value_type = ValueType::from_sql_type_name(&record.data_type);
    let field = match table
        .descriptor
        .add_column(record.column.as_str(), value_type)
    {
        Ok(field) => field.clone(),
        Err(SqlError::DuplicateColumn {
            table: qualified,
            column,
        }) => {
            warn!(table = %qualified, %column, "Duplicate column in catalog metadata");
            return Err(GenerateError::DuplicateProperty {
                table: qualified,
                column,
            });
        }
    };
    table.columns.push(GeneratedColumn {
        field,
        data_type: record.data_type.clone(),
        nullable: record.nullable,
    });
    Ok(())
}
