//! Configuration file structures for meteomapa.
//!
//! This module defines the configuration file format using YAML. All values
//! have defaults, so running without a configuration file works out of the
//! box.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Alert feed settings
//! feed:
//!   # Accepted file name prefix for downloaded feeds
//!   file_prefix: "meteoalarm-legacy-atom-spain"
//!
//! # Region index settings
//! regions:
//!   # Number of regions (codes R01..R<count>)
//!   count: 40
//!
//! # Overlay settings
//! overlay:
//!   # Level used when none is given on the command line
//!   default_level: amarillo
//! ```
//!
//! # Environment Variable Overrides
//!
//! Any value can be overridden with a `METEOMAPA_`-prefixed environment
//! variable, using `__` as the section separator:
//!
//! ```bash
//! export METEOMAPA_FEED__FILE_PREFIX="meteoalarm-legacy-atom-france"
//! export METEOMAPA_OVERLAY__DEFAULT_LEVEL="rojo"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::overlay::SeverityLevel;

/// Root configuration structure.
///
/// Loaded from an optional YAML file merged with `METEOMAPA_`-prefixed
/// environment variables; every field falls back to its default when absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alert feed configuration.
    pub feed: Feed,
    /// Region index configuration.
    pub regions: Regions,
    /// Overlay configuration.
    pub overlay: Overlay,
}

impl Config {
    /// Loads the configuration from a YAML file with environment overrides.
    ///
    /// A missing file is not an error: defaults apply, and environment
    /// variables can still override them.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] when the file or an environment value
    /// cannot be deserialized into the expected shape.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("METEOMAPA_").split("__"))
            .extract()
    }
}

/// Alert feed configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Feed {
    /// Accepted file name prefix for downloaded alert feeds.
    ///
    /// Files not starting with this prefix are rejected before parsing.
    pub file_prefix: String,
}

impl Default for Feed {
    fn default() -> Self {
        Feed {
            file_prefix: "meteoalarm-legacy-atom-spain".to_string(),
        }
    }
}

/// Region index configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Regions {
    /// Number of regions; codes run `R01..R<count>`.
    pub count: u32,
}

impl Default for Regions {
    fn default() -> Self {
        Regions { count: 40 }
    }
}

/// Overlay configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Overlay {
    /// Severity level used when none is given on the command line.
    pub default_level: SeverityLevel,
}

impl Default for Overlay {
    fn default() -> Self {
        Overlay {
            default_level: SeverityLevel::Amarillo,
        }
    }
}
