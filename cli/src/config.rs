//! Configuration file support for maintainme.
//!
//! Loads optional `maintainme.toml` from the working directory.

use anyhow::{Context, Result};
use maintainme_site::{SiteMetadata, Theme};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "maintainme.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document metadata (`[site]`)
    pub site: SiteMetadata,
    /// Pre-render settings (`[render]`)
    pub render: RenderConfig,
}

/// Pre-render settings
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Theme baked into the static page.
    pub theme: Theme,
    /// Output file; stdout when unset.
    pub output: Option<PathBuf>,
}

impl SiteConfig {
    /// Load config from `maintainme.toml` in the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE_NAME))
    }

    /// Load config from a specific path, falling back to defaults.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::load_explicit(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e:#}");
                Self::default()
            }
        }
    }

    /// Load config from a path the user asked for. Missing or invalid files
    /// are errors.
    pub fn load_explicit(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
