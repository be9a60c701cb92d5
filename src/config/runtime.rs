//! Runtime configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Runtime configuration for the embedding host
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Validate runtime configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_filter.trim().is_empty() {
            return Err(ValidationError::EmptyLogFilter);
        }
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "screening_sherpa=info".to_string()
}
