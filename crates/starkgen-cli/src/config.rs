//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `STARKGEN_*` environment variables, `__` between key segments
//!    (`STARKGEN_DEFAULTS__FRAMEWORK=hardhat`)
//! 3. Config file (`--config`, or the platform default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult, IntoCli};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Values used when a command does not name them.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    #[serde(default)]
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub framework: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Override directory, laid out as `<framework>/<standard>.<ext>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

const DEFAULT_FRAMEWORK: &str = "nile";
const DEFAULT_FORMAT: &str = "auto";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                framework: DEFAULT_FRAMEWORK.into(),
            },
            output: OutputConfig {
                no_color: false,
                format: DEFAULT_FORMAT.into(),
            },
            templates: TemplateConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. Without
    /// it the platform default path is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };

        let settings = Config::builder()
            .set_default("defaults.framework", DEFAULT_FRAMEWORK)?
            .set_default("output.no_color", false)?
            .set_default("output.format", DEFAULT_FORMAT)?
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("STARKGEN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.starkgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "starkgen", "starkgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".starkgen.toml"))
    }

    /// Serialise as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn write_default(path: &Path, force: bool) -> CliResult<()> {
        if path.exists() && !force {
            return Err(CliError::ConfigError {
                message: format!("{} already exists", path.display()),
                source: None,
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_cli_context(|| format!("creating {}", parent.display()))?;
        }

        let body = Self::default().to_toml()?;
        std::fs::write(path, body).with_cli_context(|| format!("writing {}", path.display()))
    }

    /// Look up a dotted key for `config get`.
    pub fn get(&self, key: &str) -> CliResult<String> {
        match key {
            "defaults.framework" => Ok(self.defaults.framework.clone()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            "templates.dir" => Ok(self
                .templates
                .dir
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default()),
            _ => Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            }),
        }
    }
}
