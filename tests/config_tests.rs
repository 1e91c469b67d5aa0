//! Configuration loading tests

use std::io::Write;

use linkform::config::{StaticConfig, get_config, init_config};
use tempfile::NamedTempFile;

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = toml_file(
        r#"
[logging]
level = "debug"
file = ""

[ui]
toast_duration_ms = 1500
"#,
    );

    let config = StaticConfig::try_load_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_empty());
    assert_eq!(config.ui.toast_duration_ms, 1500);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let config = StaticConfig::load_from(path.to_str().unwrap());
    assert_eq!(config.logging.file, "linkform.log");
    assert_eq!(config.ui.toast_duration_ms, 5000);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let file = toml_file("[ui\ntick_rate_ms = ");

    assert!(StaticConfig::try_load_from(file.path().to_str().unwrap()).is_err());
    let config = StaticConfig::load_from(file.path().to_str().unwrap());
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_env_overrides_file() {
    let file = toml_file("[logging]\nformat = \"text\"\n");

    // SAFETY: no other test in this binary reads or writes this variable
    unsafe { std::env::set_var("LINKFORM__LOGGING__FORMAT", "json") };
    let config = StaticConfig::try_load_from(file.path().to_str().unwrap()).unwrap();
    unsafe { std::env::remove_var("LINKFORM__LOGGING__FORMAT") };

    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_global_config_initializes_once() {
    let file = toml_file("[ui]\ntick_rate_ms = 100\n");
    let first = init_config(file.path().to_str().unwrap());
    assert_eq!(first.ui.tick_rate_ms, 100);

    let other = toml_file("[ui]\ntick_rate_ms = 999\n");
    let second = init_config(other.path().to_str().unwrap());
    assert_eq!(second.ui.tick_rate_ms, 100);
    assert_eq!(get_config().ui.tick_rate_ms, 100);
}

#[test]
fn test_sample_config_is_loadable() {
    let file = toml_file(&StaticConfig::generate_sample_config());
    let config = StaticConfig::try_load_from(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.logging.level, "info");
}
