//! Command-line interface for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::data::{load_options, FieldValue};

#[derive(Debug, Parser)]
#[command(
    name = "button-group",
    about = "Interactive demo of the selectable button group widget",
    version
)]
pub struct Cli {
    /// Data directory (config and logs); defaults to ~/.button-group
    #[arg(long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Config file; defaults to <data-dir>/config.toml when present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file holding an array of option records
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Initially selected value (JSON scalar, otherwise taken as a string)
    #[arg(long)]
    pub selected: Option<String>,

    /// Field used as the button label
    #[arg(long = "label-field")]
    pub label_field: Option<String>,

    /// Field used as the button identity
    #[arg(long = "value-field")]
    pub value_field: Option<String>,

    /// Do not adopt value-changed notifications into the selected value
    #[arg(long = "no-adopt")]
    pub no_adopt: bool,

    /// Print the rendered group once and exit
    #[arg(long)]
    pub print: bool,

    /// Width used with --print
    #[arg(long, default_value_t = 80)]
    pub width: u16,
}

impl Cli {
    /// Load configuration and apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(path) = &self.options {
            config.demo.options = load_options(path)?;
        }
        if let Some(selected) = &self.selected {
            config.demo.selected = FieldValue::parse_loose(selected);
        }
        if let Some(label) = &self.label_field {
            config.fields.label = label.clone();
        }
        if let Some(value) = &self.value_field {
            config.fields.value = value.clone();
        }
        if self.no_adopt {
            config.demo.adopt_updates = false;
        }
        Ok(())
    }
}
