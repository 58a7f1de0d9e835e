mod button_group;
mod theme;

pub use button_group::{
    ButtonGroup, ButtonGroupEvent, ButtonGroupState, ButtonSlot, END_CAP, SEPARATOR, START_CAP,
};
pub use theme::{parse_hex_color, ButtonGroupTheme};
