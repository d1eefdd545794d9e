//! Configuration system for PlanMatch.
//!
//! Load matcher configuration from TOML or YAML files to retune rule weights
//! and field defaults without code changes. An empty file yields the stock
//! ranking.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use planmatch_config::MatcherConfig;
//!
//! let config = MatcherConfig::from_toml_str(r#"
//!     max_reasons = 3
//!
//!     [weights]
//!     goal_match = 40
//!     beginner_mismatch_penalty = -80
//! "#).unwrap();
//!
//! assert_eq!(config.max_reasons, 3);
//! assert_eq!(config.weights.get("goal_match"), Some(&40));
//! assert_eq!(config.default_sessions_per_week, 3);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use planmatch_config::MatcherConfig;
//!
//! let config = MatcherConfig::load("matcher.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use planmatch_core::{MatchScore, WeightKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Largest weight magnitude a configuration may set.
pub const MAX_WEIGHT: i64 = 1_000_000;

/// Main matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MatcherConfig {
    /// Maximum match reasons kept per plan.
    #[serde(default = "default_max_reasons")]
    pub max_reasons: usize,

    /// Sessions per week assumed for plans that don't state it.
    #[serde(default = "default_sessions_per_week")]
    pub default_sessions_per_week: u32,

    /// Session minutes assumed for plans that don't state it.
    #[serde(default = "default_session_minutes")]
    pub default_session_minutes: u32,

    /// Minutes from the bucket code within which an out-of-range session
    /// still earns the near-fit bonus (exclusive).
    #[serde(default = "default_duration_tolerance")]
    pub duration_tolerance: u32,

    /// Weight overrides by name, e.g. `goal_match = 40`.
    #[serde(default)]
    pub weights: BTreeMap<String, i64>,
}

fn default_max_reasons() -> usize {
    2
}

fn default_sessions_per_week() -> u32 {
    3
}

fn default_session_minutes() -> u32 {
    45
}

fn default_duration_tolerance() -> u32 {
    15
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_reasons: default_max_reasons(),
            default_sessions_per_week: default_sessions_per_week(),
            default_session_minutes: default_session_minutes(),
            duration_tolerance: default_duration_tolerance(),
            weights: BTreeMap::new(),
        }
    }
}

impl MatcherConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
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
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a file, choosing YAML for `.yaml`/`.yml` extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Checks weight names, weight magnitudes, and field defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_sessions_per_week == 0 {
            return Err(ConfigError::Invalid(
                "default_sessions_per_week must be at least 1".to_string(),
            ));
        }
        if let Some(name) = self
            .weights
            .keys()
            .find(|name| WeightKey::from_name(name).is_none())
        {
            return Err(ConfigError::Invalid(format!("unknown weight '{}'", name)));
        }
        if let Some((name, weight)) = self
            .weights
            .iter()
            .find(|(_, weight)| weight.unsigned_abs() > MAX_WEIGHT.unsigned_abs())
        {
            return Err(ConfigError::Invalid(format!(
                "weight '{}' = {} is outside -{MAX_WEIGHT}..={MAX_WEIGHT}",
                name, weight
            )));
        }
        Ok(())
    }

    /// Overrides one weight.
    pub fn with_weight(mut self, key: WeightKey, weight: i64) -> Self {
        self.weights.insert(key.name().to_string(), weight);
        self
    }

    /// Sets the reason cap.
    pub fn with_max_reasons(mut self, max_reasons: usize) -> Self {
        self.max_reasons = max_reasons;
        self
    }

    /// Returns the effective value of a weight, override or stock.
    ///
    /// # Examples
    ///
    /// ```
    /// use planmatch_config::MatcherConfig;
    /// use planmatch_core::{MatchScore, WeightKey};
    ///
    /// let config = MatcherConfig::new().with_weight(WeightKey::FrequencyFar, -40);
    ///
    /// assert_eq!(config.weight(WeightKey::FrequencyFar), MatchScore::of(-40));
    /// assert_eq!(config.weight(WeightKey::FrequencyExact), MatchScore::of(25));
    /// ```
    pub fn weight(&self, key: WeightKey) -> MatchScore {
        self.weights
            .get(key.name())
            .copied()
            .map(MatchScore::of)
            .unwrap_or_else(|| key.default_weight())
    }
}
