//! Solver configuration.
//!
//! Tuning knobs for the annealing search, loadable from TOML or YAML
//! files or strings. Every field has a default, so a partial file only
//! overrides what it names.
//!
//! # Examples
//!
//! ```
//! use tessera_solver::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(
//!     r#"
//!     cooling_rate = 0.95
//!     max_iterations = 10000
//!     random_seed = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.initial_temperature, 10.0);
//! assert_eq!(config.cooling_rate, 0.95);
//! assert_eq!(config.max_iterations, Some(10000));
//! config.validate().unwrap();
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parse error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A knob is outside its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tuning knobs for the annealing search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Temperature at the first iteration.
    pub initial_temperature: f64,

    /// Multiplicative temperature decay applied after every iteration.
    pub cooling_rate: f64,

    /// Probability of restricting a proposal to cells near the last
    /// accepted placement.
    pub locality_bias: f64,

    /// Euclidean radius, in cells, of the locality restriction.
    pub locality_radius: f64,

    /// Consecutive rejections before half the placements are rolled
    /// back.
    pub half_reset_after: u32,

    /// Consecutive rejections before every placement is rolled back.
    pub full_reset_after: u32,

    /// Hard iteration ceiling; unlimited when absent.
    pub max_iterations: Option<u64>,

    /// Seed for the solver's random stream; OS entropy when absent.
    pub random_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10.0,
            cooling_rate: 0.90,
            locality_bias: 0.7,
            locality_radius: 3.0,
            half_reset_after: 15,
            full_reset_after: 30,
            max_iterations: None,
            random_seed: None,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the iteration ceiling.
    pub fn with_max_iterations(mut self, limit: u64) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Checks that every knob is inside its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending knob.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial_temperature must be a positive finite number, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "cooling_rate must be in (0, 1], got {}",
                self.cooling_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.locality_bias) {
            return Err(ConfigError::Invalid(format!(
                "locality_bias must be in [0, 1], got {}",
                self.locality_bias
            )));
        }
        if !self.locality_radius.is_finite() || self.locality_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "locality_radius must be a positive finite number, got {}",
                self.locality_radius
            )));
        }
        if self.half_reset_after >= self.full_reset_after {
            return Err(ConfigError::Invalid(format!(
                "half_reset_after ({}) must be below full_reset_after ({})",
                self.half_reset_after, self.full_reset_after
            )));
        }
        Ok(())
    }
}
