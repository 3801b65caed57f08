//! Corrector configuration (.yml-corrector.yml)

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{CorrectorError, Result};

/// Default config file name, looked up in the target directory
pub const CONFIG_FILE: &str = ".yml-corrector.yml";

/// Main corrector configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// File extensions treated as content files
    pub extensions: Vec<String>,
    /// Glob patterns matched against file names; matches are skipped
    pub exclude: Vec<String>,
    /// Follow symlinks while walking the target directory
    pub follow_links: bool,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            // Hugo section list pages
            exclude: vec!["_index.md".to_string()],
            follow_links: true,
            output: OutputConfig::default(),
        }
    }
}

impl CorrectorConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CorrectorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| CorrectorError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `.yml-corrector.yml` from `dir` if present, otherwise defaults
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if config_path.is_file() {
            tracing::debug!("Loading config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// How corrected front-matter is written back
///
/// The YAML emitter always renders nested mappings and sequences as indented
/// blocks; these options only cover what the emitter leaves open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Render an empty mapping as nothing at all instead of `{}`
    pub omit_empty_mapping: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            omit_empty_mapping: true,
        }
    }
}
