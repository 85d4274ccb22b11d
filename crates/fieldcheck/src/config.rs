//! # Configuration
//!
//! Engine configuration is managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `FIELDCHECK_SEPARATOR`, `FIELDCHECK_PARALLEL`, etc.
//! 2. **Config file**: a TOML file passed to [`EngineConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `separator` | `,` | Separates rule entries in field metadata |
//! | `value_separator` | `=` | Separates a rule name from its argument |
//! | `name_key` | `name` | Reserved tag key that sets a field's display name |
//! | `parallel` | `false` | Validate a record's fields on the rayon pool |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::tags::TagSyntax;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    #[config(env = "FIELDCHECK_SEPARATOR", default = ",")]
    pub separator: String,

    #[config(env = "FIELDCHECK_VALUE_SEPARATOR", default = "=")]
    pub value_separator: String,

    #[config(env = "FIELDCHECK_NAME_KEY", default = "name")]
    pub name_key: String,

    #[config(env = "FIELDCHECK_PARALLEL", default = false)]
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            value_separator: "=".to_string(),
            name_key: "name".to_string(),
            parallel: false,
        }
    }
}

impl EngineConfig {
    /// Load from the environment and, if given, a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// Tag syntax described by this config.
    ///
    /// Both separators must be non-empty and distinct.
    pub fn syntax(&self) -> Result<TagSyntax> {
        if self.separator.is_empty() || self.value_separator.is_empty() {
            return Err(ValidationError::InvalidConfig(
                "separators cannot be empty".to_string(),
            ));
        }
        if self.separator == self.value_separator {
            return Err(ValidationError::InvalidConfig(format!(
                "separator and value_separator are both {:?}",
                self.separator
            )));
        }
        Ok(TagSyntax {
            separator: self.separator.clone(),
            value_separator: self.value_separator.clone(),
            name_key: self.name_key.clone(),
        })
    }
}
