mod settings;

pub use settings::{
    Config, ConfigError, DemoConfig, TomlConfig, TomlDemoConfig, TomlThemeConfig,
};
