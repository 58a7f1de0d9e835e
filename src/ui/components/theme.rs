//! Colours for the button group.

use ratatui::style::{Color, Modifier, Style};

use crate::config::{ConfigError, TomlThemeConfig};

/// Button group colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonGroupTheme {
    /// Label colour of the active button
    pub active_fg: Color,
    /// Fill of the active button
    pub active_bg: Color,
    /// Label colour of inactive buttons
    pub inactive_fg: Color,
    /// Fill of inactive buttons
    pub inactive_bg: Color,
    /// Divider between adjacent buttons
    pub separator: Color,
}

impl Default for ButtonGroupTheme {
    fn default() -> Self {
        Self {
            active_fg: Color::Rgb(0xF9, 0xF9, 0xF9),
            active_bg: Color::Rgb(0x42, 0x42, 0x42),
            inactive_fg: Color::Rgb(0x42, 0x42, 0x42),
            inactive_bg: Color::Rgb(0xEE, 0xEE, 0xEE),
            separator: Color::Rgb(0xBD, 0xBD, 0xBD),
        }
    }
}

impl ButtonGroupTheme {
    /// Apply configured hex colours over the defaults.
    pub fn from_overrides(overrides: &TomlThemeConfig) -> Result<Self, ConfigError> {
        let mut theme = Self::default();
        let slots: [(&'static str, &Option<String>, &mut Color); 5] = [
            ("active_fg", &overrides.active_fg, &mut theme.active_fg),
            ("active_bg", &overrides.active_bg, &mut theme.active_bg),
            ("inactive_fg", &overrides.inactive_fg, &mut theme.inactive_fg),
            ("inactive_bg", &overrides.inactive_bg, &mut theme.inactive_bg),
            ("separator", &overrides.separator, &mut theme.separator),
        ];
        for (field, value, target) in slots {
            if let Some(value) = value {
                *target = parse_hex_color(value).ok_or_else(|| ConfigError::InvalidColor {
                    field,
                    value: value.clone(),
                })?;
            }
        }
        Ok(theme)
    }

    /// Style for a button label.
    pub fn button_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.active_fg)
                .bg(self.active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.inactive_fg).bg(self.inactive_bg)
        }
    }

    /// Style for a cap glyph: drawn in the button's fill colour.
    pub fn cap_style(&self, active: bool) -> Style {
        let fill = if active {
            self.active_bg
        } else {
            self.inactive_bg
        };
        Style::default().fg(fill)
    }

    pub fn separator_style(&self) -> Style {
        Style::default().fg(self.separator).bg(self.inactive_bg)
    }
}

/// Parse a hex color string to a Color.
///
/// Supports formats: "#RGB", "#RRGGBB", "#RRGGBBAA" (alpha ignored); the
/// leading `#` is optional.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        3 => {
            let r = channel(0..1)? * 17;
            let g = channel(1..2)? * 17;
            let b = channel(2..3)? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 | 8 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => None,
    }
}
