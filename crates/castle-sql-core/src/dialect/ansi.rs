//! ANSI double-quote formatter.

use super::Formatter;

/// Quotes identifiers as `"name"`, doubling any embedded `"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiFormatter;

impl AnsiFormatter {
    /// Creates a new ANSI formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for AnsiFormatter {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}
