//! Resolver configuration.
//!
//! Every field has a default, so an empty JSON object (or TOML document) is a
//! complete configuration.

use crate::error::{Result, TzError};
use crate::index::DEFAULT_NODE_CAPACITY;
use serde::de::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capacities above this make leaves slow to scan; allowed, but logged.
const LARGE_NODE_CAPACITY: usize = 256;

/// What to answer when several distinct zones contain the query point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Return every matching zone and let the caller decide.
    #[default]
    ReportAll,
    /// Return the zone of the earliest-loaded matching region.
    PreferFirstLoaded,
    /// Return the zone of the matching region with the smallest area, so
    /// enclaves win over the zone surrounding them.
    PreferSmallestArea,
}

/// Resolver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum entries per index node
    #[serde(default = "Config::default_node_capacity")]
    pub node_capacity: usize,

    #[serde(default)]
    pub ambiguity_policy: AmbiguityPolicy,

    /// Reject coordinates outside latitude [-90, 90] / longitude [-180, 180]
    /// in `try_resolve`. Leave off for projected or synthetic data.
    #[serde(default)]
    pub geographic_bounds: bool,
}

impl Config {
    const fn default_node_capacity() -> usize {
        DEFAULT_NODE_CAPACITY
    }

    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity >= 2, "Node capacity must be at least 2");
        self.node_capacity = capacity;
        self
    }

    pub fn with_ambiguity_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity_policy = policy;
        self
    }

    pub fn with_geographic_bounds(mut self, enabled: bool) -> Self {
        self.geographic_bounds = enabled;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.node_capacity < 2 {
            return Err(format!(
                "Node capacity must be at least 2, got {}",
                self.node_capacity
            ));
        }

        Ok(())
    }

    /// Allowed, but every leaf visit scans up to `node_capacity` envelopes.
    pub fn has_large_node_capacity(&self) -> bool {
        self.node_capacity > LARGE_NODE_CAPACITY
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// `.json` is always supported; `.toml` needs the `toml` feature.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                Self::from_json(&contents).map_err(|e| TzError::InvalidConfig(e.to_string()))
            }
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| TzError::InvalidConfig(e.to_string()))
            }
            other => Err(TzError::InvalidConfig(format!(
                "Unsupported configuration format for {}: {:?}",
                path.display(),
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_capacity: Self::default_node_capacity(),
            ambiguity_policy: AmbiguityPolicy::default(),
            geographic_bounds: false,
        }
    }
}
