pub mod cli;
pub mod config;
pub mod data;
pub mod reactive;
pub mod ui;
pub mod util;

pub use config::{Config, ConfigError};
pub use data::{load_options, FieldNames, FieldValue, OptionList, OptionRecord};
pub use reactive::{Emitter, Observable, Subscription};
pub use ui::components::{
    ButtonGroup, ButtonGroupEvent, ButtonGroupState, ButtonGroupTheme, ButtonSlot,
};
pub use ui::App;
