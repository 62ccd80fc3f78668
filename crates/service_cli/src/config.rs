//! CLI configuration management.
//!
//! Loads configuration from a TOML file with environment variable override
//! support. A missing file yields the defaults.

use std::path::Path;

use pricer_core::types::{FactorSet, OptionType};
use pricer_models::instruments::ContractData;
use pricer_risk::parallel::ParallelConfig;
use serde::{Deserialize, Serialize};

use crate::{CliError, Result};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "carry.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Finite-difference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiniteDifferenceConfig {
    /// Spot bump `h` for approximate delta and gamma
    pub bump: f64,
}

impl Default for FiniteDifferenceConfig {
    fn default() -> Self {
        Self { bump: 0.01 }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,

    /// Contract used when the command line does not override a factor
    pub contract: ContractData,

    /// Finite-difference settings
    pub finite_difference: FiniteDifferenceConfig,

    /// Matrix evaluation parallelism
    pub parallel: ParallelConfig,
}

fn default_contract() -> ContractData {
    ContractData::new(FactorSet::new(1.5, 120.0, 0.4, 0.04, 0.0, 100.0)).with_option_type(OptionType::Call)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            contract: default_contract(),
            finite_difference: FiniteDifferenceConfig::default(),
            parallel: ParallelConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparsable numeric values leave the current setting in place.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("CARRY_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(bump) = lookup("CARRY_FD_BUMP").and_then(|v| v.parse().ok()) {
            self.finite_difference.bump = bump;
        }

        if let Some(threshold) = lookup("CARRY_PARALLEL_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.parallel.parallel_threshold = threshold;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        let bump = self.finite_difference.bump;
        if !(bump.is_finite() && bump > 0.0) {
            errors.push(format!("finite_difference.bump must be positive, got {bump}"));
        }

        if self.parallel.batch_size == 0 {
            errors.push("parallel.batch_size must be greater than 0".to_string());
        }

        if let Err(e) = self.contract.factors.validate() {
            errors.push(format!("contract: {e}"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Config(errors.join("; ")))
        }
    }

    /// Load from file (or defaults) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}
