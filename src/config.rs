//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lottie-keypath/keypath.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `KEYPATH_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::INDENT_UNIT;

/// Output layout of the key-path tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// One name per line, nested levels indented
    #[default]
    Indent,
    /// Box-drawing tree
    Tree,
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Indent => write!(f, "indent"),
            RenderStyle::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for RenderStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indent" => Ok(RenderStyle::Indent),
            "tree" => Ok(RenderStyle::Tree),
            other => Err(ApplicationError::Config {
                message: format!("unknown style: {other} (expected indent or tree)"),
            }),
        }
    }
}

/// Unified configuration for keypath.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output layout (default: indent)
    pub style: RenderStyle,
    /// Indent added per tree level in indent style (default: two spaces)
    pub indent: String,
    /// Separator between names in key paths (default: ".")
    pub separator: String,
    /// Message printed instead of a tree when none can be built
    pub placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: RenderStyle::Indent,
            indent: INDENT_UNIT.to_string(),
            separator: ".".to_string(),
            placeholder: "<No Data>".to_string(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub style: Option<RenderStyle>,
    pub indent: Option<String>,
    pub separator: Option<String>,
    pub placeholder: Option<String>,
}

/// Get the XDG config directory for keypath.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lottie-keypath").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("keypath.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            indent: overlay.indent.clone().unwrap_or_else(|| self.indent.clone()),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            placeholder: overlay
                .placeholder
                .clone()
                .unwrap_or_else(|| self.placeholder.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/lottie-keypath/keypath.toml`
    /// 3. Explicit config file
    /// 4. Environment variables: `KEYPATH_*` prefix
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("KEYPATH").prefix_separator("_")
    }

    /// Apply KEYPATH_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse()?;
        }
        if let Ok(val) = config.get_string("indent") {
            settings.indent = val;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }
        if let Ok(val) = config.get_string("placeholder") {
            settings.placeholder = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# keypath configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/lottie-keypath/keypath.toml
#   Explicit: keypath --config <FILE>
#   Env:      KEYPATH_* environment variables (explicit overrides)

# Output layout: "indent" or "tree"
# style = "indent"

# Indent added per level in indent style
# indent = "  "

# Separator between names for `keypath paths`
# separator = "."

# Printed instead of a tree when the document has no root name
# placeholder = "<No Data>"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
