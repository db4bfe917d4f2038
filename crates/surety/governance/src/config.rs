//! Governance configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use surety_types::Amount;

/// Registered count at which admission starts requiring a vote
pub const DEFAULT_CONSENSUS_THRESHOLD: usize = 4;

/// Minimum funding, in whole units
pub const DEFAULT_MIN_FUNDING_UNITS: u64 = 10;

/// Errors loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunable governance parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    /// Registered count at which admission requires a majority vote
    pub consensus_threshold: usize,
    /// Minimum accepted funding, in whole units
    pub min_funding_units: u64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
            min_funding_units: DEFAULT_MIN_FUNDING_UNITS,
        }
    }
}

impl GovernanceConfig {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GovernanceConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.consensus_threshold == 0 {
            return Err(ConfigError::Invalid(
                "consensus_threshold must be at least 1".into(),
            ));
        }
        if self.min_funding_units == 0 {
            return Err(ConfigError::Invalid(
                "min_funding_units must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Minimum accepted funding in subunits
    pub fn min_funding(&self) -> Amount {
        Amount::whole_units(self.min_funding_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GovernanceConfig::default();
        assert_eq!(config.consensus_threshold, 4);
        assert_eq!(config.min_funding(), Amount::whole_units(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let config = GovernanceConfig::load("/nonexistent/path/surety.toml").unwrap();
        assert_eq!(config, GovernanceConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GovernanceConfig::from_toml_str("consensus_threshold = 6").unwrap();
        assert_eq!(config.consensus_threshold, 6);
        assert_eq!(config.min_funding_units, DEFAULT_MIN_FUNDING_UNITS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = GovernanceConfig::from_toml_str("consensus_threshold = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let result = GovernanceConfig::from_toml_str("min_funding_units = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = GovernanceConfig::from_toml_str("consensus_threshold = \"four\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
