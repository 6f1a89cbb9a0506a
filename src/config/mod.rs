//! Optional TOML configuration.
//!
//! A config file passed with `--config` can preset any command-line option.
//! All keys are optional; unknown keys are rejected.
//!
//! ```toml
//! root = "src"              # relative to this file's directory
//! output = "html"           # ascii | html | json
//! extension = "vue"
//! exclude = ["node_modules", "dist"]
//! sorted = true
//! depth = 4
//! ```
//!
//! Command-line flags win over the file, and the file wins over built-in
//! defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::GraphError;
use crate::render::OutputFormat;
use crate::utils::ScanOptions;

/// Settings read from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Directory to scan for component files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,

    /// Component file extension, without the dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Directory names skipped during the scan. Replaces the default list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Sort directory entries by name during the scan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorted: Option<bool>,

    /// Maximum rendered depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl GraphConfig {
    /// Load a config file.
    ///
    /// A relative `root` is resolved against the directory holding the file.
    ///
    /// # Errors
    ///
    /// - [`GraphError::ConfigNotFound`] if the file does not exist
    /// - [`GraphError::ConfigParseError`] if it is not valid TOML for this schema
    /// - any other read failure, with the path as context
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GraphError::ConfigNotFound {
                    path: path.display().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()));
            }
        };

        let mut config = Self::parse(&content, path)?;
        if let Some(root) = config.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.root = Some(if root.is_relative() { base.join(root) } else { root });
        }

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse config text; `source` names the file in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConfigParseError`] on invalid TOML, unknown keys,
    /// or values of the wrong type.
    pub fn parse(content: &str, source: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            GraphError::ConfigParseError {
                file: source.display().to_string(),
                reason: e.to_string().trim_end().to_string(),
            }
            .into()
        })
    }

    /// Scan options with this file's values over the defaults.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();
        ScanOptions {
            extension: self.extension.clone().unwrap_or(defaults.extension),
            exclude_dirs: self.exclude.clone().unwrap_or(defaults.exclude_dirs),
            sorted: self.sorted.unwrap_or(defaults.sorted),
        }
    }
}
