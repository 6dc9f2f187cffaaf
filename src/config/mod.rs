// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and app title
//! - `[docs]` - Documentation source and repository link
//! - `[drawer]` - Navigation drawer behavior
//!
//! Every field is optional. The file is never written by the application:
//! the theme override and the current page live only for the session.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_DOCS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_docs::config;
//!
//! let (config, warning) = config::load_with_override(None);
//! if warning.is_none() {
//!     println!("repository: {}", config.repository_url());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Title shown in the app bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Where documentation pages come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocsConfig {
    /// Directory containing `pages/**/index.md`. Uses the bundled pages when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Target of the app bar's external link button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

/// Navigation drawer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawerConfig {
    /// Initial value of every section's local expanded flag.
    #[serde(default = "default_sections_expanded")]
    pub sections_expanded: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            sections_expanded: default_sections_expanded(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub drawer: DrawerConfig,
}

impl Config {
    /// Title for the app bar, falling back to the built-in default.
    #[must_use]
    pub fn title(&self) -> &str {
        self.general.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// Repository URL for the external link button.
    #[must_use]
    pub fn repository_url(&self) -> &str {
        self.docs
            .repository_url
            .as_deref()
            .unwrap_or(DEFAULT_REPOSITORY_URL)
    }
}

fn default_sections_expanded() -> bool {
    DEFAULT_SECTIONS_EXPANDED
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from `base_dir`, or the resolved config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring invalid configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"
title = "My Docs"

[docs]
root = "/srv/docs"
repository_url = "https://example.org/repo"

[drawer]
sections_expanded = false
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.title(), "My Docs");
        assert_eq!(config.docs.root, Some(PathBuf::from("/srv/docs")));
        assert_eq!(config.repository_url(), "https://example.org/repo");
        assert!(!config.drawer.sections_expanded);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let config = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.repository_url(), DEFAULT_REPOSITORY_URL);
        assert!(config.docs.root.is_none());
        assert_eq!(config.drawer.sections_expanded, DEFAULT_SECTIONS_EXPANDED);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[drawer]\nsections_expanded = 3")
            .expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
