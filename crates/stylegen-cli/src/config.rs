//! Generator configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stylegen_codegen::{FormatterConfig, SerializerConfig};

/// Options read from `--config`. Missing keys fall back to defaults.
///
/// ```json
/// { "toolName": "tailwindcss-react-native", "uiFramework": "react-native", "stylesheetCreate": true }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub formatter: FormatterConfig,
    #[serde(flatten)]
    pub serializer: SerializerConfig,
}

impl Config {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
