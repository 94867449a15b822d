//! WHERE / ON condition expressions.

use super::value::{SqlValue, ToSqlValue};
use super::INDENT;
use crate::dialect::Formatter;
use crate::schema::FieldDescriptor;

/// The right-hand side of a comparison: a literal or another field.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal rendered inline.
    Value(SqlValue),
    /// A field rendered through the formatter.
    Field(FieldDescriptor),
}

impl Operand {
    /// Renders the operand.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        match self {
            Self::Value(value) => value.to_sql_inline(),
            Self::Field(field) => formatter.format_field(field),
        }
    }
}

/// Conversion into an [`Operand`].
pub trait IntoOperand {
    /// Converts `self` into an operand.
    fn into_operand(self) -> Operand;
}

impl<T: ToSqlValue> IntoOperand for T {
    fn into_operand(self) -> Operand {
        Operand::Value(self.to_sql_value())
    }
}

impl IntoOperand for FieldDescriptor {
    fn into_operand(self) -> Operand {
        Operand::Field(self)
    }
}

impl IntoOperand for &FieldDescriptor {
    fn into_operand(self) -> Operand {
        Operand::Field(self.clone())
    }
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Operand {
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Condition {
    Compare {
        field: FieldDescriptor,
        op: String,
        rhs: Operand,
    },
    Postfix {
        field: FieldDescriptor,
        op: &'static str,
    },
    InList {
        field: FieldDescriptor,
        values: Vec<SqlValue>,
        negated: bool,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    fn render(&self, formatter: &dyn Formatter) -> String {
        match self {
            Self::Compare { field, op, rhs } => format!(
                "{} {op} {}",
                formatter.format_field(field),
                rhs.render(formatter)
            ),
            Self::Postfix { field, op } => format!("{} {op}", formatter.format_field(field)),
            // An empty IN list is not valid SQL; fold it to a constant predicate.
            Self::InList {
                values, negated, ..
            } if values.is_empty() => {
                String::from(if *negated { "1 = 1" } else { "1 = 0" })
            }
            Self::InList {
                field,
                values,
                negated,
            } => {
                let keyword = if *negated { "NOT IN" } else { "IN" };
                let items: Vec<String> = values.iter().map(SqlValue::to_sql_inline).collect();
                format!(
                    "{} {keyword} ({})",
                    formatter.format_field(field),
                    items.join(", ")
                )
            }
            Self::And(left, right) => format!(
                "({} AND {})",
                left.render(formatter),
                right.render(formatter)
            ),
            Self::Or(left, right) => format!(
                "({} OR {})",
                left.render(formatter),
                right.render(formatter)
            ),
            Self::Not(inner) => format!("NOT ({})", inner.render(formatter)),
        }
    }
}

/// An immutable condition fragment used in WHERE and JOIN ... ON.
///
/// Build one with the free functions in this module ([`eq`], [`not_eq`],
/// [`compare`], ...) or the matching methods on [`FieldDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct WhereExpression {
    condition: Condition,
}

impl WhereExpression {
    /// Creates a comparison with an arbitrary operator symbol.
    #[must_use]
    pub fn new(field: &FieldDescriptor, op: impl Into<String>, rhs: impl IntoOperand) -> Self {
        Self {
            condition: Condition::Compare {
                field: field.clone(),
                op: op.into(),
                rhs: rhs.into_operand(),
            },
        }
    }

    /// Combines two conditions with AND.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self {
            condition: Condition::And(Box::new(self.condition), Box::new(other.condition)),
        }
    }

    /// Combines two conditions with OR.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            condition: Condition::Or(Box::new(self.condition), Box::new(other.condition)),
        }
    }

    /// Negates the condition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self {
            condition: Condition::Not(Box::new(self.condition)),
        }
    }

    /// Renders the condition as used after `ON`, with no leading whitespace.
    #[must_use]
    pub fn render(&self, formatter: &dyn Formatter) -> String {
        self.condition.render(formatter)
    }

    /// Renders the condition as used under `WHERE`, with leading indentation.
    #[must_use]
    pub fn render_clause(&self, formatter: &dyn Formatter) -> String {
        format!("{INDENT}{}", self.render(formatter))
    }
}

/// `field = value`.
#[must_use]
pub fn eq(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, "=", value)
}

/// `field <> value`.
#[must_use]
pub fn not_eq(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, "<>", value)
}

/// `field < value`.
#[must_use]
pub fn lt(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, "<", value)
}

/// `field <= value`.
#[must_use]
pub fn lt_eq(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, "<=", value)
}

/// `field > value`.
#[must_use]
pub fn gt(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, ">", value)
}

/// `field >= value`.
#[must_use]
pub fn gt_eq(field: &FieldDescriptor, value: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, ">=", value)
}

/// `field LIKE pattern`.
#[must_use]
pub fn like(field: &FieldDescriptor, pattern: impl IntoOperand) -> WhereExpression {
    WhereExpression::new(field, "LIKE", pattern)
}

/// `field <op> value` for any operator symbol.
#[must_use]
pub fn compare(
    field: &FieldDescriptor,
    op: impl Into<String>,
    value: impl IntoOperand,
) -> WhereExpression {
    WhereExpression::new(field, op, value)
}

/// `field IS NULL`.
#[must_use]
pub fn is_null(field: &FieldDescriptor) -> WhereExpression {
    WhereExpression {
        condition: Condition::Postfix {
            field: field.clone(),
            op: "IS NULL",
        },
    }
}

/// `field IS NOT NULL`.
#[must_use]
pub fn is_not_null(field: &FieldDescriptor) -> WhereExpression {
    WhereExpression {
        condition: Condition::Postfix {
            field: field.clone(),
            op: "IS NOT NULL",
        },
    }
}

/// `field IN (v1, v2, ...)`.
#[must_use]
pub fn in_list<T: ToSqlValue>(
    field: &FieldDescriptor,
    values: impl IntoIterator<Item = T>,
) -> WhereExpression {
    WhereExpression {
        condition: Condition::InList {
            field: field.clone(),
            values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
            negated: false,
        },
    }
}

/// `field NOT IN (v1, v2, ...)`.
#[must_use]
pub fn not_in_list<T: ToSqlValue>(
    field: &FieldDescriptor,
    values: impl IntoIterator<Item = T>,
) -> WhereExpression {
    WhereExpression {
        condition: Condition::InList {
            field: field.clone(),
            values: values.into_iter().map(ToSqlValue::to_sql_value).collect(),
            negated: true,
        },
    }
}

/// `(left AND right)`.
#[must_use]
pub fn and(left: WhereExpression, right: WhereExpression) -> WhereExpression {
    left.and(right)
}

/// `(left OR right)`.
#[must_use]
pub fn or(left: WhereExpression, right: WhereExpression) -> WhereExpression {
    left.or(right)
}

/// `NOT (expr)`.
#[must_use]
pub fn not(expr: WhereExpression) -> WhereExpression {
    expr.not()
}

impl FieldDescriptor {
    /// Creates an equality expression.
    #[must_use]
    pub fn eq(&self, value: impl IntoOperand) -> WhereExpression {
        eq(self, value)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(&self, value: impl IntoOperand) -> WhereExpression {
        not_eq(self, value)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(&self, value: impl IntoOperand) -> WhereExpression {
        lt(self, value)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(&self, value: impl IntoOperand) -> WhereExpression {
        lt_eq(self, value)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(&self, value: impl IntoOperand) -> WhereExpression {
        gt(self, value)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(&self, value: impl IntoOperand) -> WhereExpression {
        gt_eq(self, value)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(&self, pattern: impl IntoOperand) -> WhereExpression {
        like(self, pattern)
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(&self) -> WhereExpression {
        is_null(self)
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(&self) -> WhereExpression {
        is_not_null(self)
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list<T: ToSqlValue>(&self, values: impl IntoIterator<Item = T>) -> WhereExpression {
        in_list(self, values)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dialect::BracketFormatter;
    use crate::schema::{Table, ValueType};

    fn field(name: &str, value_type: ValueType) -> FieldDescriptor {
        let table = Arc::new(Table::new("Blogs").with_schema("dbo"));
        FieldDescriptor::new(table, name, value_type)
    }

    fn render(expr: &WhereExpression) -> String {
        expr.render(&BracketFormatter::new())
    }

    #[test]
    fn test_eq_integer_literal() {
        let id = field("Id", ValueType::Int);
        assert_eq!(render(&eq(&id, 1)), "[dbo].[Blogs].[Id] = 1");
    }

    #[test]
    fn test_text_literal_is_quoted_and_escaped() {
        let name = field("Name", ValueType::Text);
        assert_eq!(
            render(&eq(&name, "O'Brien")),
            "[dbo].[Blogs].[Name] = 'O''Brien'"
        );
        assert_eq!(
            render(&not_eq(&name, "x")),
            "[dbo].[Blogs].[Name] <> 'x'"
        );
    }

    #[test]
    fn test_field_operand() {
        let posts = Arc::new(Table::new("Posts").with_schema("dbo"));
        let blog_id = FieldDescriptor::new(posts, "BlogId", ValueType::Int);
        let id = field("Id", ValueType::Int);
        assert_eq!(
            render(&blog_id.eq(&id)),
            "[dbo].[Posts].[BlogId] = [dbo].[Blogs].[Id]"
        );
    }

    #[test]
    fn test_clause_style_adds_indent_only() {
        let id = field("Id", ValueType::Int);
        let expr = id.gt(10);
        let formatter = BracketFormatter::new();
        assert_eq!(
            expr.render_clause(&formatter),
            format!("\t\t\t\t{}", expr.render(&formatter))
        );
    }

    #[test]
    fn test_compare_with_custom_operator() {
        let id = field("Id", ValueType::Int);
        assert_eq!(render(&compare(&id, "!<", 5)), "[dbo].[Blogs].[Id] !< 5");
    }

    #[test]
    fn test_null_predicates() {
        let name = field("Name", ValueType::Text);
        assert_eq!(render(&name.is_null()), "[dbo].[Blogs].[Name] IS NULL");
        assert_eq!(
            render(&name.is_not_null()),
            "[dbo].[Blogs].[Name] IS NOT NULL"
        );
    }

    #[test]
    fn test_in_list() {
        let id = field("Id", ValueType::Int);
        assert_eq!(
            render(&id.in_list([1, 2, 3])),
            "[dbo].[Blogs].[Id] IN (1, 2, 3)"
        );
        assert_eq!(
            render(&not_in_list(&id, vec!["a'b"])),
            "[dbo].[Blogs].[Id] NOT IN ('a''b')"
        );
    }

    #[test]
    fn test_empty_in_list_folds_to_constant() {
        let id = field("Id", ValueType::Int);
        assert_eq!(render(&in_list(&id, Vec::<i32>::new())), "1 = 0");
        assert_eq!(render(&not_in_list(&id, Vec::<i32>::new())), "1 = 1");
    }

    #[test]
    fn test_and_or_not() {
        let id = field("Id", ValueType::Int);
        let name = field("Name", ValueType::Text);
        let expr = or(and(id.gt(1), name.like("A%")), not(id.eq(7)));
        assert_eq!(
            render(&expr),
            "(([dbo].[Blogs].[Id] > 1 AND [dbo].[Blogs].[Name] LIKE 'A%') OR NOT ([dbo].[Blogs].[Id] = 7))"
        );
    }

    #[test]
    fn test_null_literal() {
        let name = field("Name", ValueType::Text);
        assert_eq!(
            render(&eq(&name, None::<&str>)),
            "[dbo].[Blogs].[Name] = NULL"
        );
    }
}
