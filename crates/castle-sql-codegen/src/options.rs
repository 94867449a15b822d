//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Options controlling class naming and emitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Whether the schema name is part of each class name (`dbo_Blogs`
    /// rather than `Blogs`).
    pub include_schema_in_class_name: bool,
    /// Inner doc comment placed at the top of the emitted module.
    pub module_doc: Option<String>,
    /// Path the emitted code imports descriptor types from.
    pub core_crate: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_schema_in_class_name: true,
            module_doc: None,
            core_crate: String::from("castle_sql_core"),
        }
    }
}

impl GeneratorOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether schema names are part of class names.
    #[must_use]
    pub const fn with_schema_in_class_name(mut self, include: bool) -> Self {
        self.include_schema_in_class_name = include;
        self
    }

    /// Sets the module doc comment.
    #[must_use]
    pub fn with_module_doc(mut self, doc: impl Into<String>) -> Self {
        self.module_doc = Some(doc.into());
        self
    }

    /// Sets the crate path imported by emitted code.
    #[must_use]
    pub fn with_core_crate(mut self, path: impl Into<String>) -> Self {
        self.core_crate = path.into();
        self
    }

    /// Reads options from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or if [`GeneratorOptions::validate`] fails.
    pub fn from_json(input: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that the options can produce usable output.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidOptions`] if `core_crate` is blank.
    pub fn validate(&self) -> Result<()> {
        if self.core_crate.trim().is_empty() {
            return Err(GenerateError::InvalidOptions(String::from(
                "core_crate must not be empty",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GeneratorOptions::new();
        assert!(options.include_schema_in_class_name);
        assert_eq!(options.core_crate, "castle_sql_core");
        assert!(options.module_doc.is_none());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options =
            GeneratorOptions::from_json(r#"{"include_schema_in_class_name": false}"#).unwrap();
        assert_eq!(
            options,
            GeneratorOptions::new().with_schema_in_class_name(false)
        );
    }

    #[test]
    fn test_from_json_rejects_empty_core_crate() {
        let err = GeneratorOptions::from_json(r#"{"core_crate": "  "}"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidOptions(_)));
    }
}
