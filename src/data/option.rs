//! Option records rendered by the button group.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

use super::FieldValue;

/// One selectable record: an opaque map from field name to value.
///
/// Which fields act as label and identity is decided by [`FieldNames`], not by
/// the record itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionRecord {
    fields: BTreeMap<String, FieldValue>,
}

/// Ordered option list; order decides render order and cap placement.
pub type OptionList = Vec<OptionRecord>;

impl OptionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Display text for `field`; empty when the field is missing.
    pub fn label(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    /// Identity value for `field`; a missing field reads as `Null`.
    pub fn value(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or_default()
    }
}

/// Field names used to read label and identity from each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub label: String,
    pub value: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            label: "label".to_string(),
            value: "value".to_string(),
        }
    }
}

impl FieldNames {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Load an option list from a JSON array of flat objects.
pub fn load_options(path: &Path) -> Result<OptionList, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options: OptionList =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Options {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = options.len(), "Loaded options");
    Ok(options)
}
