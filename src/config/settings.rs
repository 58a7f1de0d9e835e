use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::{FieldNames, FieldValue, OptionList, OptionRecord};
use crate::ui::components::ButtonGroupTheme;
use crate::util::paths::config_path;

/// Errors raised while loading configuration or option files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Options file is not a JSON array of flat objects.
    #[error("Invalid options file {path}: {source}")]
    Options {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A theme colour is not a hex colour.
    #[error("Invalid color for theme.{field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Field names used for label and identity
    pub fields: FieldNames,
    /// Resolved button colours
    pub theme: ButtonGroupTheme,
    /// Demo host settings
    pub demo: DemoConfig,
}

/// Settings for the interactive demo host.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub options: OptionList,
    pub selected: FieldValue,
    /// Whether the host adopts `value-changed` notifications into its
    /// selected value.
    pub adopt_updates: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let options = (1..=3)
            .map(|n| {
                OptionRecord::new()
                    .with("label", format!("Option {n}"))
                    .with("value", format!("option{n}"))
            })
            .collect();
        Self {
            options,
            selected: FieldValue::from("option1"),
            adopt_updates: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: FieldNames::default(),
            theme: ButtonGroupTheme::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// TOML representation of theme colours (hex strings)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlThemeConfig {
    pub active_fg: Option<String>,
    pub active_bg: Option<String>,
    pub inactive_fg: Option<String>,
    pub inactive_bg: Option<String>,
    pub separator: Option<String>,
}

/// TOML representation of the demo section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlDemoConfig {
    pub options: Option<OptionList>,
    pub selected: Option<FieldValue>,
    pub adopt_updates: Option<bool>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub fields: Option<FieldNames>,
    pub theme: Option<TomlThemeConfig>,
    pub demo: Option<TomlDemoConfig>,
}

impl Config {
    /// Load from the default config path, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse TOML contents, merging values over the defaults.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig =
            toml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Config::default();

        if let Some(fields) = toml_config.fields {
            config.fields = fields;
        }

        if let Some(theme) = toml_config.theme {
            config.theme = ButtonGroupTheme::from_overrides(&theme)?;
        }

        if let Some(demo) = toml_config.demo {
            if let Some(options) = demo.options {
                config.demo.options = options;
            }
            if let Some(selected) = demo.selected {
                config.demo.selected = selected;
            }
            if let Some(adopt) = demo.adopt_updates {
                config.demo.adopt_updates = adopt;
            }
        }

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
