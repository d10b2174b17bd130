//! UiSmith configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uismith_theme::ThemeLocks;

pub const CONFIG_FILE: &str = "uismith.toml";

/// Top-level UiSmith configuration (uismith.toml)
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSmithConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub contrast: ContrastConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the working theme lives and how new ones start
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Saved theme file (relative to the config directory)
    #[serde(default = "default_theme_path")]
    pub path: PathBuf,
    /// Preset used when no theme has been saved yet
    #[serde(default)]
    pub preset: Option<String>,
    /// Fields `generate` keeps from the current theme
    #[serde(default)]
    pub locks: ThemeLocks,
}

fn default_theme_path() -> PathBuf {
    PathBuf::from(".uismith/theme.json")
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: default_theme_path(),
            preset: None,
            locks: ThemeLocks::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ContrastConfig {
    /// Fail instead of keeping a best-effort color when a fix is unreachable
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl UiSmithConfig {
    /// Load configuration from a directory (looks for uismith.toml)
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: UiSmithConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if config.theme.path.is_relative() {
            if let Some(dir) = config_path.parent() {
                config.theme.path = dir.join(&config.theme.path);
            }
        }

        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = UiSmithConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config, UiSmithConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn partial_file_fills_defaults_and_resolves_theme_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[theme]
preset = "zinc"

[theme.locks]
accent = true

[output]
format = "json"
"#,
        )
        .unwrap();

        let config = UiSmithConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.theme.preset.as_deref(), Some("zinc"));
        assert!(config.theme.locks.accent);
        assert!(!config.theme.locks.background);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.contrast.strict);
        assert_eq!(config.theme.path, dir.path().join(".uismith/theme.json"));
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[output]\nformat = \"yaml\"\n").unwrap();
        let err = UiSmithConfig::load_from_dir(dir.path()).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse"));
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = UiSmithConfig::default().to_toml().unwrap();
        let back: UiSmithConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, UiSmithConfig::default());
    }
}
