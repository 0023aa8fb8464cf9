//! Engine configuration loaded from TOML
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! regulation_group_id = "gdpr"
//! default_sector = "health"
//!
//! [export]
//! delimiter = ","
//! sub_requirement_separator = "; "
//! ```

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_REGULATION_GROUP_ID: &str = "gdpr";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Id of the group partitioned from every other framework
    #[serde(default = "default_regulation_group_id")]
    pub regulation_group_id: String,
    /// Sector applied when the caller does not pass one
    #[serde(default)]
    pub default_sector: Option<String>,
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_regulation_group_id() -> String {
    DEFAULT_REGULATION_GROUP_ID.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            regulation_group_id: default_regulation_group_id(),
            default_sector: None,
            export: ExportConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        content.parse()
    }

    fn validate(self) -> Result<Self> {
        if self.regulation_group_id.trim().is_empty() {
            return Err(EngineError::Config(
                "regulation_group_id must not be empty".to_string(),
            ));
        }
        if !self.export.delimiter.is_ascii() {
            return Err(EngineError::Config(format!(
                "export delimiter must be a single ASCII character, got {:?}",
                self.export.delimiter
            )));
        }
        Ok(self)
    }
}

impl std::str::FromStr for EngineConfig {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()
    }
}

/// Delimited-export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Joins a group's sub-requirements into one cell
    #[serde(default = "default_sub_requirement_separator")]
    pub sub_requirement_separator: String,
}

fn default_delimiter() -> char {
    ','
}

fn default_sub_requirement_separator() -> String {
    "; ".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            sub_requirement_separator: default_sub_requirement_separator(),
        }
    }
}
