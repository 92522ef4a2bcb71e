use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{Locale, NumberFormat};

/// Largest fraction digit count accepted in a config file
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Error types for loading a converter config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("max_fraction_digits must be at most 20, got {0}")]
    InvalidFractionDigits(usize),
}

/// Result formatting preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub locale: Locale,
    pub max_fraction_digits: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            max_fraction_digits: 6,
        }
    }
}

impl ConverterConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::InvalidFractionDigits(self.max_fraction_digits));
        }
        Ok(())
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            locale: self.locale,
            max_fraction_digits: self.max_fraction_digits,
        }
    }
}
