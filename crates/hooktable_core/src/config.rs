//! Generator configuration.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::source::DEFAULT_SOURCE_URL;

/// Configuration for the generator.
///
/// Every field has a default, so an empty configuration file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// URL fetched when no source file is given. Also recorded in the
    /// generated header.
    pub source_url: String,

    /// Text of the level-2 heading after which tables are inspected.
    pub heading: String,

    /// Text expected in the first header cell of a webhook table.
    pub table_header: String,

    /// Name of the generated constant.
    pub const_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            heading: "Webhook events".to_string(),
            table_header: "Webhook event payload".to_string(),
            const_name: "ALL_WEBHOOK_TYPES".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_jsonc(&content)
    }

    /// Parses configuration from JSONC text (JSON with comments) and validates it.
    pub fn from_jsonc(content: &str) -> Result<Self, ConfigError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ConfigError::invalid(format!("Failed to parse config: {}", e)))?
            .unwrap_or(serde_json::Value::Object(serde_json::Map::new()));

        let config: Self = serde_json::from_value(value)
            .map_err(|e| ConfigError::invalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_const_ident(&self.const_name) {
            return Err(ConfigError::InvalidConstName(self.const_name.clone()));
        }
        if self.heading.is_empty() {
            return Err(ConfigError::invalid("heading must not be empty"));
        }
        if self.table_header.is_empty() {
            return Err(ConfigError::invalid("tableHeader must not be empty"));
        }
        Ok(())
    }
}

/// `SCREAMING_SNAKE_CASE` identifier, not starting with a digit and not `_` alone.
fn is_const_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_uppercase() || (first == '_' && name.len() > 1))
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
