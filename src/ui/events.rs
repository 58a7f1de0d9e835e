use crate::data::FieldValue;
use crate::ui::components::ButtonGroupEvent;

/// Application-level events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The group asked the host to adopt a new selected value
    ValueChanged(FieldValue),

    /// The group reported a selection for side effects
    Change(FieldValue),

    /// The host replaced its selected value on its own
    ExternalUpdate(FieldValue),

    /// Toggle whether `ValueChanged` is adopted
    ToggleAdopt,

    /// Request to quit the application
    Quit,
}

impl From<&ButtonGroupEvent> for AppEvent {
    fn from(event: &ButtonGroupEvent) -> Self {
        match event {
            ButtonGroupEvent::ValueChanged(value) => AppEvent::ValueChanged(value.clone()),
            ButtonGroupEvent::Change(value) => AppEvent::Change(value.clone()),
        }
    }
}
