//! Configuration file loading.
//!
//! A single YAML file carries the same four fields the global flags expose;
//! flags win over file values during context resolution. Parsing goes through
//! the `config` crate behind a small loader facade.

use crate::error::OptionsError;
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

/// File read when `--file` is not passed.
pub const DEFAULT_CONFIG_FILE: &str = "runway.yml";

/// Contents of the config file. Every field is optional at the file level;
/// context resolution reports what is still missing after the merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunwayConfig {
    pub project: Option<String>,
    pub region: Option<String>,
    pub service: Option<String>,
    pub runner: Option<String>,
}

/// Loader facade over the `config` crate.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load an explicitly requested config file. The file must exist and parse.
    pub fn load_from_file(path: &Path) -> Result<RunwayConfig, OptionsError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load the default config file from the working directory. A missing
    /// file yields an empty config; the flags may still supply every field.
    pub fn load_default() -> Result<RunwayConfig, OptionsError> {
        let settings = Config::builder()
            .add_source(
                File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
