//! Declared column value types.

use std::fmt;

/// The declared value type of a column.
///
/// Value types drive operator typing and code generation only; rendered
/// SQL never depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    BigInt,
    /// 16-bit integer.
    SmallInt,
    /// 8-bit unsigned integer.
    TinyInt,
    /// Boolean / bit.
    Bool,
    /// Character data of any width.
    Text,
    /// Fixed-point decimal (including money types).
    Decimal,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Date and time.
    DateTime,
    /// Date only.
    Date,
    /// Time only.
    Time,
    /// Globally unique identifier.
    Guid,
    /// Binary data.
    Binary,
    /// A catalog type with no dedicated mapping, kept verbatim.
    Other(String),
}

impl ValueType {
    /// Maps a catalog type name (SQL Server or ANSI spelling) to a value type.
    ///
    /// Matching ignores case and any length/precision suffix, so
    /// `NVARCHAR(50)` and `nvarchar` map alike.
    #[must_use]
    pub fn from_sql_type_name(type_name: &str) -> Self {
        let base = type_name
            .split('(')
            .next()
            .unwrap_or(type_name)
            .trim()
            .to_ascii_lowercase();

        match base.as_str() {
            "int" | "integer" | "int4" => Self::Int,
            "bigint" | "int8" => Self::BigInt,
            "smallint" | "int2" => Self::SmallInt,
            "tinyint" => Self::TinyInt,
            "bit" | "bool" | "boolean" => Self::Bool,
            "char" | "nchar" | "varchar" | "nvarchar" | "text" | "ntext" | "character"
            | "character varying" | "sysname" | "xml" => Self::Text,
            "decimal" | "numeric" | "money" | "smallmoney" => Self::Decimal,
            "real" | "float4" => Self::Float,
            "float" | "double" | "double precision" | "float8" => Self::Double,
            "datetime" | "datetime2" | "smalldatetime" | "datetimeoffset" | "timestamp" => {
                Self::DateTime
            }
            "date" => Self::Date,
            "time" => Self::Time,
            "uniqueidentifier" | "uuid" => Self::Guid,
            "binary" | "varbinary" | "image" | "blob" | "bytea" | "rowversion" => Self::Binary,
            _ => Self::Other(type_name.trim().to_string()),
        }
    }

    /// Returns the Rust type name used by generated code for this value type.
    #[must_use]
    pub fn rust_type(&self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::BigInt => "i64",
            Self::SmallInt => "i16",
            Self::TinyInt => "u8",
            Self::Bool => "bool",
            Self::Float => "f32",
            Self::Decimal | Self::Double => "f64",
            Self::Binary => "Vec<u8>",
            Self::Text
            | Self::DateTime
            | Self::Date
            | Self::Time
            | Self::Guid
            | Self::Other(_) => "String",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "Int"),
            Self::BigInt => write!(f, "BigInt"),
            Self::SmallInt => write!(f, "SmallInt"),
            Self::TinyInt => write!(f, "TinyInt"),
            Self::Bool => write!(f, "Bool"),
            Self::Text => write!(f, "Text"),
            Self::Decimal => write!(f, "Decimal"),
            Self::Float => write!(f, "Float"),
            Self::Double => write!(f, "Double"),
            Self::DateTime => write!(f, "DateTime"),
            Self::Date => write!(f, "Date"),
            Self::Time => write!(f, "Time"),
            Self::Guid => write!(f, "Guid"),
            Self::Binary => write!(f, "Binary"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}
