//! Bracket-quoting formatter (SQL Server style).

use super::Formatter;

/// Quotes identifiers as `[name]`, doubling any embedded `]`.
///
/// This is the default formatter.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketFormatter;

impl BracketFormatter {
    /// Creates a new bracket formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for BracketFormatter {
    fn name(&self) -> &'static str {
        "bracket"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("[{}]", name.replace(']', "]]"))
    }
}
