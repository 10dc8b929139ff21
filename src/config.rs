//! Planner configuration.

use crate::geohash::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};

/// Configuration for a [`QueryPlanner`](crate::QueryPlanner).
///
/// # Examples
///
/// ```rust
/// use geohash_query::Config;
///
/// // Create default config
/// let config = Config::default();
/// assert_eq!(config.default_precision, 10);
///
/// // Load from JSON
/// let json = r#"{
///     "default_precision": 12,
///     "merge_queries": false
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(!config.merge_queries);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Precision (1-22) used when encoding without an explicit precision
    #[serde(default = "Config::default_precision")]
    pub default_precision: usize,

    /// Whether adjacent and overlapping queries are merged before returning
    #[serde(default = "Config::default_merge_queries")]
    pub merge_queries: bool,
}

impl Config {
    const fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    const fn default_merge_queries() -> bool {
        true
    }

    pub fn with_default_precision(mut self, precision: usize) -> Self {
        self.default_precision = precision;
        self
    }

    pub fn with_merge_queries(mut self, merge: bool) -> Self {
        self.merge_queries = merge;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.default_precision < 1 || self.default_precision > MAX_PRECISION {
            return Err(format!(
                "Default precision must be between 1 and {}",
                MAX_PRECISION
            ));
        }
        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error;

        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        use serde::de::Error;

        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            merge_queries: Self::default_merge_queries(),
        }
    }
}
