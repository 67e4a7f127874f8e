//! Classifier rule vocabularies, with YAML loading
//!
//! Every field is optional in YAML; omitted fields keep their defaults.
//!
//! ```yaml
//! exclusion_keywords: [modern, contemporary, 21st-century, 20th-century]
//! dependent_categories: [Commentary, Targum]
//! dependence_markers: [Commentary]
//! translation_categories: [Targum]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading classifier configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Rules deciding which catalog nodes are dependent works
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Substrings of the short description that keep a node out of the forest.
    /// Matched case-insensitively.
    pub exclusion_keywords: Vec<String>,
    /// Category tags marking a dependent work
    pub dependent_categories: Vec<String>,
    /// `dependence` values marking a dependent work
    pub dependence_markers: Vec<String>,
    /// Category tags that make a dependent work a translation
    pub translation_categories: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            exclusion_keywords: strings(&[
                "modern",
                "contemporary",
                "21st-century",
                "20th-century",
            ]),
            dependent_categories: strings(&["Commentary", "Targum"]),
            dependence_markers: strings(&["Commentary"]),
            translation_categories: strings(&["Targum"]),
        }
    }
}

impl ClassifierConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null, not as an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
