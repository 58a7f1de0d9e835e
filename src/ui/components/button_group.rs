//! Selectable button group component
//!
//! Renders a row of mutually exclusive buttons from a list of option records.
//! The caller owns the selected value; the group keeps an active copy that is
//! overwritten whenever the caller's value changes, and reports user
//! selections through two notifications: `value-changed` (meant for binding
//! back into the caller's value) followed by `change` (meant for side effects).
//!
//! ```text
//! ▐ Option 1 │ Option 2 │ Option 3 ▌
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};
use unicode_width::UnicodeWidthStr;

use crate::data::{FieldNames, FieldValue, OptionRecord};
use crate::reactive::{Emitter, Observable, Subscription};

use super::ButtonGroupTheme;

/// Glyph drawn left of the first button.
pub const START_CAP: &str = "▐";
/// Glyph drawn right of the last button.
pub const END_CAP: &str = "▌";
/// Divider between adjacent buttons.
pub const SEPARATOR: &str = "│";

/// Notification emitted by a selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonGroupEvent {
    /// Binding update: the caller may adopt this as its selected value.
    ValueChanged(FieldValue),
    /// Side-effect hook carrying the same value.
    Change(FieldValue),
}

impl ButtonGroupEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ButtonGroupEvent::ValueChanged(_) => "value-changed",
            ButtonGroupEvent::Change(_) => "change",
        }
    }

    pub fn value(&self) -> &FieldValue {
        match self {
            ButtonGroupEvent::ValueChanged(value) | ButtonGroupEvent::Change(value) => value,
        }
    }
}

/// Layout of one rendered button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSlot {
    pub index: usize,
    pub label: String,
    pub value: FieldValue,
    /// Clickable region, including the cap cell when present
    pub area: Rect,
    pub active: bool,
    pub start_cap: bool,
    pub end_cap: bool,
}

/// State for the button group
///
/// Holds the active value and the listener registries. Mutation goes through
/// `&self` so listeners may re-enter (for example to adopt the new value into
/// a bound observable) while a notification is in flight.
#[derive(Debug)]
pub struct ButtonGroupState {
    active: Rc<RefCell<FieldValue>>,
    value_changed: Emitter<FieldValue>,
    change: Emitter<FieldValue>,
    events: Emitter<ButtonGroupEvent>,
    /// External sync subscription, when bound
    sync: Option<Subscription>,
}

impl Default for ButtonGroupState {
    fn default() -> Self {
        Self::new(FieldValue::Null)
    }
}

impl ButtonGroupState {
    /// Create an unbound state starting at `selected`.
    pub fn new(selected: FieldValue) -> Self {
        Self {
            active: Rc::new(RefCell::new(selected)),
            value_changed: Emitter::new(),
            change: Emitter::new(),
            events: Emitter::new(),
            sync: None,
        }
    }

    /// Create a state that follows `selected`.
    pub fn bound(selected: &Observable<FieldValue>) -> Self {
        let mut state = Self::new(selected.get());
        state.bind(selected);
        state
    }

    /// Follow `selected`, replacing any previous binding.
    ///
    /// The active value is overwritten immediately and on every later change.
    pub fn bind(&mut self, selected: &Observable<FieldValue>) {
        *self.active.borrow_mut() = selected.get();
        let active = Rc::clone(&self.active);
        self.sync = Some(selected.subscribe(move |value| {
            tracing::debug!(value = %value, "Button group synced to external selection");
            *active.borrow_mut() = value.clone();
        }));
    }

    pub fn unbind(&mut self) {
        self.sync = None;
    }

    pub fn is_bound(&self) -> bool {
        self.sync.is_some()
    }

    /// Push an external selection without an observable.
    pub fn sync_selected(&self, value: FieldValue) {
        tracing::debug!(value = %value, "Button group synced to external selection");
        *self.active.borrow_mut() = value;
    }

    pub fn active_value(&self) -> FieldValue {
        self.active.borrow().clone()
    }

    pub fn is_active(&self, value: &FieldValue) -> bool {
        *self.active.borrow() == *value
    }

    /// Select the option at `index`.
    ///
    /// Sets the active value, then emits `value-changed` and `change`, in
    /// that order. Emits even when the option was already active. Returns
    /// `None` for an out-of-range index.
    pub fn select(
        &self,
        options: &[OptionRecord],
        fields: &FieldNames,
        index: usize,
    ) -> Option<FieldValue> {
        let option = options.get(index)?;
        let value = option.value(&fields.value);
        *self.active.borrow_mut() = value.clone();
        tracing::debug!(index, value = %value, "Button group selection");

        self.value_changed.emit(&value);
        self.events
            .emit(&ButtonGroupEvent::ValueChanged(value.clone()));
        self.change.emit(&value);
        self.events.emit(&ButtonGroupEvent::Change(value.clone()));

        Some(value)
    }

    /// Listen for `value-changed`.
    pub fn on_value_changed(&self, listener: impl Fn(&FieldValue) + 'static) -> Subscription {
        self.value_changed.subscribe(listener)
    }

    /// Listen for `change`.
    pub fn on_change(&self, listener: impl Fn(&FieldValue) + 'static) -> Subscription {
        self.change.subscribe(listener)
    }

    /// Listen for both notifications as [`ButtonGroupEvent`]s.
    pub fn on_event(&self, listener: impl Fn(&ButtonGroupEvent) + 'static) -> Subscription {
        self.events.subscribe(listener)
    }
}

/// Button group widget
pub struct ButtonGroup<'a> {
    options: &'a [OptionRecord],
    fields: FieldNames,
    theme: ButtonGroupTheme,
}

impl<'a> ButtonGroup<'a> {
    pub fn new(options: &'a [OptionRecord]) -> Self {
        Self {
            options,
            fields: FieldNames::default(),
            theme: ButtonGroupTheme::default(),
        }
    }

    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn label_field(mut self, field: impl Into<String>) -> Self {
        self.fields.label = field.into();
        self
    }

    pub fn value_field(mut self, field: impl Into<String>) -> Self {
        self.fields.value = field.into();
        self
    }

    pub fn theme(mut self, theme: ButtonGroupTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn options(&self) -> &'a [OptionRecord] {
        self.options
    }

    pub fn field_names(&self) -> &FieldNames {
        &self.fields
    }

    /// One slot per option, in list order, laid out on the first row of `area`.
    ///
    /// Slots past the right edge keep their logical position; drawing and
    /// hit testing clip them.
    pub fn layout(&self, area: Rect, state: &ButtonGroupState) -> Vec<ButtonSlot> {
        let count = self.options.len();
        let mut x = area.x;
        let mut slots = Vec::with_capacity(count);

        for (index, option) in self.options.iter().enumerate() {
            let start_cap = index == 0;
            let end_cap = index + 1 == count;
            let label = option.label(&self.fields.label);
            let value = option.value(&self.fields.value);
            let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);

            let width = label_width
                .saturating_add(2)
                .saturating_add(u16::from(start_cap))
                .saturating_add(u16::from(end_cap));

            slots.push(ButtonSlot {
                index,
                active: state.is_active(&value),
                label,
                value,
                area: Rect::new(x, area.y, width, area.height.min(1)),
                start_cap,
                end_cap,
            });

            // Skip past the button and its separator
            x = x.saturating_add(width).saturating_add(1);
        }

        slots
    }

    /// Total columns the group occupies.
    pub fn width(&self) -> u16 {
        let labels: usize = self
            .options
            .iter()
            .map(|option| option.label(&self.fields.label).width() + 2)
            .sum();
        let caps = if self.options.is_empty() { 0 } else { 2 };
        let separators = self.options.len().saturating_sub(1);
        u16::try_from(labels + caps + separators).unwrap_or(u16::MAX)
    }

    /// Render the group
    pub fn render(&self, area: Rect, buf: &mut Buffer, state: &ButtonGroupState) {
        if area.is_empty() || self.options.is_empty() {
            return;
        }

        for slot in self.layout(area, state) {
            let y = slot.area.y;
            let mut x = slot.area.x;

            if slot.start_cap {
                put(buf, area, x, y, START_CAP, self.theme.cap_style(slot.active));
                x = x.saturating_add(1);
            }

            let text = format!(" {} ", slot.label);
            put(buf, area, x, y, &text, self.theme.button_style(slot.active));

            let right = slot.area.right();
            if slot.end_cap {
                put(
                    buf,
                    area,
                    right.saturating_sub(1),
                    y,
                    END_CAP,
                    self.theme.cap_style(slot.active),
                );
            } else {
                put(buf, area, right, y, SEPARATOR, self.theme.separator_style());
            }
        }
    }

    /// Index of the slot under a screen position.
    pub fn slot_at(
        &self,
        area: Rect,
        state: &ButtonGroupState,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        let position = Position::new(column, row);
        self.layout(area, state)
            .into_iter()
            .find(|slot| slot.area.intersection(area).contains(position))
            .map(|slot| slot.index)
    }

    /// Index of the first option matching the active value.
    pub fn active_index(&self, state: &ButtonGroupState) -> Option<usize> {
        self.options
            .iter()
            .position(|option| state.is_active(&option.value(&self.fields.value)))
    }

    /// Select the button under a left click.
    pub fn handle_mouse(
        &self,
        area: Rect,
        state: &ButtonGroupState,
        mouse: MouseEvent,
    ) -> Option<FieldValue> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let index = self.slot_at(area, state, mouse.column, mouse.row)?;
        state.select(self.options, &self.fields, index)
    }

    /// Keyboard selection: ←/→ (h/l) step with wrap, Home/End, digits 1-9.
    pub fn handle_key(&self, state: &ButtonGroupState, key: KeyEvent) -> Option<FieldValue> {
        if key.kind == KeyEventKind::Release
            || key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        let count = self.options.len();
        if count == 0 {
            return None;
        }
        let current = self.active_index(state);

        let target = match key.code {
            KeyCode::Left | KeyCode::Char('h') => match current {
                Some(0) | None => count - 1,
                Some(i) => i - 1,
            },
            KeyCode::Right | KeyCode::Char('l') => match current {
                Some(i) if i + 1 < count => i + 1,
                _ => 0,
            },
            KeyCode::Home => 0,
            KeyCode::End => count - 1,
            KeyCode::Char(c @ '1'..='9') => (c as usize) - ('1' as usize),
            _ => return None,
        };

        state.select(self.options, &self.fields, target)
    }
}

/// Write `text` at (x, y), clipped to `area`.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return;
    }
    let max_width = usize::from(area.right() - x);
    buf.set_stringn(x, y, text, max_width, style);
}
