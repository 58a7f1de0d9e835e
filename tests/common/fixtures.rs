//! Option list fixtures

use button_group::{FieldValue, OptionRecord};

/// `Option 1`..`Option 3` with identities `option1`..`option3`.
pub fn three_options() -> Vec<OptionRecord> {
    (1..=3)
        .map(|n| {
            OptionRecord::new()
                .with("label", format!("Option {n}"))
                .with("value", format!("option{n}"))
        })
        .collect()
}

/// Records keyed by `name`/`id` with integer identities.
pub fn named_options() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new().with("name", "One").with("id", 1),
        OptionRecord::new().with("name", "Two").with("id", 2),
    ]
}

/// Build records from labels, with identities `v0`, `v1`, ...
pub fn options_from_labels(labels: &[String]) -> Vec<OptionRecord> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            OptionRecord::new()
                .with("label", label.as_str())
                .with("value", identity(i))
        })
        .collect()
}

pub fn identity(index: usize) -> FieldValue {
    FieldValue::from(format!("v{index}"))
}
