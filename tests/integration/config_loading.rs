//! Integration tests for configuration and option files feeding the demo host

use std::fs;

use button_group::cli::Cli;
use button_group::{App, Config, ConfigError, FieldValue};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_config_file_drives_rendering() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "config.toml",
        r#"
[fields]
label = "name"
value = "id"

[demo]
selected = 1
options = [{ name = "One", id = 1 }, { name = "Two", id = 2 }]
"#,
    );

    let config = Config::load_from(&path).unwrap();
    let app = App::new(config);

    assert_eq!(app.render_snapshot(20), "▐ One │ Two ▌");
    assert_eq!(app.active_value(), FieldValue::Int(1));
}

#[test]
fn test_cli_options_file_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config_path = write(&dir, "config.toml", "[demo]\nadopt_updates = true\n");
    let options_path = write(
        &dir,
        "options.json",
        r#"[{"label": "Low", "value": 0.5}, {"label": "High", "value": 2}]"#,
    );

    let cli = Cli::try_parse_from([
        "button-group",
        "--config",
        config_path.to_str().unwrap(),
        "--options",
        options_path.to_str().unwrap(),
        "--selected",
        "0.5",
    ])
    .unwrap();
    let app = App::new(cli.resolve_config().unwrap());

    assert_eq!(app.render_snapshot(30), "▐ Low │ High ▌");
    assert_eq!(app.selected_value(), FieldValue::Float(0.5));
    assert_eq!(app.active_value(), FieldValue::Float(0.5));
}

#[test]
fn test_bad_options_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let options_path = write(&dir, "options.json", "{ not json");

    let cli = Cli::try_parse_from([
        "button-group",
        "--options",
        options_path.to_str().unwrap(),
    ])
    .unwrap();

    let mut config = Config::default();
    let err = cli.apply_overrides(&mut config).unwrap_err();
    assert!(matches!(err, ConfigError::Options { .. }));
    assert!(err.to_string().contains("options.json"));
}

#[test]
fn test_bad_theme_color_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.toml", "[theme]\nactive_bg = \"#12\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert_eq!(err.to_string(), "Invalid color for theme.active_bg: \"#12\"");
}

#[test]
fn test_float_identities_match_integer_selection() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "config.toml",
        r#"
[demo]
selected = 2
options = [{ label = "Half", value = 0.5 }, { label = "Two", value = 2.0 }]
"#,
    );

    let mut app = App::new(Config::load_from(&path).unwrap());
    assert_eq!(app.active_value(), FieldValue::Int(2));

    // With "Two" active, stepping left lands on "Half"; with nothing active
    // it would pick the last option instead
    app.handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));

    assert_eq!(app.selected_value(), FieldValue::Float(0.5));
}
