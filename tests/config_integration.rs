//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::path::PathBuf;

use fortune_wheel::config::AppConfig;
use serial_test::serial;

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config")
}

/// Scratch config directory unique to one test
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fortune_wheel_{}_{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let from_file = AppConfig::load_from(config_dir()).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.window.width, builtin.window.width);
    assert_eq!(from_file.wheel.segments, builtin.wheel.segments);
    assert_eq!(from_file.wheel.decay, builtin.wheel.decay);
    assert_eq!(from_file.wheel.seed, None);
    assert_eq!(from_file.simulation.tick_rate, builtin.simulation.tick_rate);
    assert_eq!(from_file.rendering.pointer_color, builtin.rendering.pointer_color);
    assert_eq!(from_file.ui.tutorial_text, builtin.ui.tutorial_text);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("WHEEL_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load_from(config_dir());
    std::env::remove_var("WHEEL_WINDOW__TITLE");

    assert_eq!(config.unwrap().window.title, "Test From Env");
}

#[test]
#[serial]
fn test_env_override_seed() {
    std::env::set_var("WHEEL_WHEEL__SEED", "42");
    let config = AppConfig::load_from(config_dir());
    std::env::remove_var("WHEEL_WHEEL__SEED");

    assert_eq!(config.unwrap().wheel.seed, Some(42));
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user_override");
    std::fs::write(dir.join("default.toml"), "[wheel]\ndecay = 0.98\nmin_speed = 0.2\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[wheel]\ndecay = 0.9\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).ok();

    assert_eq!(config.wheel.decay, 0.9);
    assert_eq!(config.wheel.min_speed, 0.2);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, AppConfig::default().window.title);
    assert_eq!(config.wheel.segments.len(), 11);
}

#[test]
#[serial]
fn test_malformed_file_is_an_error() {
    let dir = scratch_dir("malformed");
    std::fs::write(dir.join("default.toml"), "[wheel]\ndecay = \"fast\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    let err = result.unwrap_err();
    assert!(format!("{}", err).starts_with("Configuration error"));
}
