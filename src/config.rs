//! Layered configuration for the Stride client.
//!
//! Values resolve file → environment → CLI flags. The file lives at
//! `~/.config/stride/config.toml` unless `--config` points elsewhere; a
//! missing default file just means defaults.
//!
//! ```toml
//! [api]
//! base_url = "https://stride.example.com/api"
//! token = "..."
//!
//! [ui]
//! theme = "dark"
//! default_sort = "newest"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

pub const ENV_API_URL: &str = "STRIDE_API_URL";
pub const ENV_TOKEN: &str = "STRIDE_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrideConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Stride service, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token; `STRIDE_TOKEN` overrides.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Sort mode applied when a list command gets no `--sort` flag.
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_base_url() -> String {
    "http://localhost:4000/api".to_string()
}

fn default_sort() -> String {
    "newest".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            default_sort: default_sort(),
        }
    }
}

impl StrideConfig {
    /// Default on-disk location: `<config dir>/stride/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stride").join("config.toml"))
    }

    /// Load from `explicit` when given (missing file is then an error), or
    /// from the default path (missing file means defaults). Environment
    /// overrides are applied after the file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => {
                    let raw = std::fs::read_to_string(&path).with_context(|| {
                        format!("Failed to read config file {}", path.display())
                    })?;
                    toml::from_str(&raw).with_context(|| {
                        format!("Failed to parse config file {}", path.display())
                    })?
                }
                _ => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Overlay `STRIDE_API_URL` and `STRIDE_TOKEN` onto file values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL)
            && !url.is_empty()
        {
            self.api.base_url = url;
        }
        if let Ok(token) = std::env::var(ENV_TOKEN)
            && !token.is_empty()
        {
            self.api.token = Some(token);
        }
    }

    /// Non-fatal problems a `config validate` run should surface.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.api.base_url.trim().is_empty() {
            warnings.push("api.base_url is empty".to_string());
        } else if !self.api.base_url.starts_with("http://")
            && !self.api.base_url.starts_with("https://")
        {
            warnings.push(format!(
                "api.base_url '{}' does not look like an HTTP URL",
                self.api.base_url
            ));
        }
        if self.api.token.is_none() {
            warnings.push(format!(
                "no api.token configured; set one in the config file or via {}",
                ENV_TOKEN
            ));
        }
        if self
            .ui
            .default_sort
            .parse::<crate::derive::GoalSort>()
            .is_err()
        {
            warnings.push(format!(
                "ui.default_sort '{}' is not a goal sort mode",
                self.ui.default_sort
            ));
        }
        warnings
    }

    /// Write a commented default config. Returns `false` (writing nothing)
    /// when the file already exists.
    pub fn write_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(true)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

const DEFAULT_CONFIG_TOML: &str = r#"# Stride client configuration

[api]
# Base URL of the Stride service, including the /api prefix.
base_url = "http://localhost:4000/api"
# Bearer token for authenticated requests. STRIDE_TOKEN overrides this.
# token = ""

[ui]
# light, dark, or auto
theme = "auto"
# Sort applied when list commands get no --sort flag:
# newest, oldest, priority, deadline, none
default_sort = "newest"
"#;
