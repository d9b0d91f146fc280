use crate::{ConfigError, ConfigErrorResult, Section};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 100;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 32;

pub const MIN_CLASS_LENGTH: usize = 1;
pub const MAX_CLASS_LENGTH: usize = 100;
pub const DEFAULT_MAX_CLASS_LENGTH: usize = 32;

/// Field limits applied by the registry before binding a name.
///
/// Lengths are counted in characters, not bytes, so CJK names get the
/// same allowance as Latin ones.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for display names
    pub max_name_length: usize,
    /// Maximum length for class labels
    pub max_class_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_class_length: DEFAULT_MAX_CLASS_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::invalid(
                Section::Validation,
                format!(
                    "validation.max_name_length must be {}-{}, got {}",
                    MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
                ),
            ));
        }

        if self.max_class_length < MIN_CLASS_LENGTH || self.max_class_length > MAX_CLASS_LENGTH {
            return Err(ConfigError::invalid(
                Section::Validation,
                format!(
                    "validation.max_class_length must be {}-{}, got {}",
                    MIN_CLASS_LENGTH, MAX_CLASS_LENGTH, self.max_class_length
                ),
            ));
        }

        Ok(())
    }
}
