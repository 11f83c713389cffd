//! Predictor configuration
//!
//! Loaded from a TOML file or built in code. Every field has a default, so an
//! empty file is a valid configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Top-level predictor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictorConfig {
    /// Seed for the forecast generator. Unset means a fresh forecast every call.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Reject profiles with out-of-range ratings before scoring.
    #[serde(default = "default_true")]
    pub validate_input: bool,

    /// Attach the score breakdown to encoded envelopes.
    #[serde(default)]
    pub include_breakdown: bool,

    /// Fixed producer instance id. Unset means a random UUID per predictor.
    #[serde(default)]
    pub instance_id: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            validate_input: true,
            include_breakdown: false,
            instance_id: None,
        }
    }
}

impl PredictorConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, PredictError> {
        toml::from_str(text).map_err(|e| PredictError::ConfigError(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let text = fs::read_to_string(path).map_err(|e| {
            PredictError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_breakdown(mut self, include: bool) -> Self {
        self.include_breakdown = include;
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_toml_is_default() {
        let config = PredictorConfig::from_toml_str("").unwrap();
        assert_eq!(config, PredictorConfig::default());
        assert!(config.validate_input);
    }

    #[test]
    fn test_toml_fields() {
        let config = PredictorConfig::from_toml_str(
            r#"
            seed = 42
            validate_input = false
            include_breakdown = true
            instance_id = "demo"
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert!(!config.validate_input);
        assert!(config.include_breakdown);
        assert_eq!(config.instance_id.as_deref(), Some("demo"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = PredictorConfig::from_toml_str("seed = \"not a number\"");
        assert!(matches!(result, Err(PredictError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PredictorConfig::load(Path::new("/nonexistent/predictor.toml"));
        assert!(matches!(result, Err(PredictError::ConfigError(_))));
    }

    #[test]
    fn test_builders() {
        let config = PredictorConfig::default()
            .with_seed(7)
            .with_breakdown(true)
            .with_instance_id("node-1");
        assert_eq!(config.seed, Some(7));
        assert!(config.include_breakdown);
        assert_eq!(config.instance_id.as_deref(), Some("node-1"));
    }
}
