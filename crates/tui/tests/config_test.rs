use alp_tui::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.ui.debounce_ms, 300);
}

#[test]
fn test_config_load_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("alp-tui.toml");

    let config_content = r#"
server_url = "http://proxy.local:3000"

[request]
timeout_secs = 60
max_retries = 2
retry_base_delay_ms = 50

[ui]
debounce_ms = 250
tick_interval_ms = 100
status_ttl_secs = 5

[logging]
level = "debug"
log_to_file = false
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = Config::from_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.server_url, "http://proxy.local:3000");
    assert_eq!(config.request.max_retries, 2);
    assert_eq!(config.ui.debounce_ms, 250);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.log_to_file);
}

#[test]
fn test_config_cli_overrides() {
    let server = "http://elsewhere:9000".to_string();
    let level = "trace".to_string();

    let config = Config::load(None, Some(&server), Some(&level)).unwrap();
    assert_eq!(config.server_url, server);
    assert_eq!(config.logging.level, level);
}

#[test]
fn test_config_rejects_invalid_server_url() {
    let mut config = Config::default();
    config.server_url = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_zero_debounce() {
    let mut config = Config::default();
    config.ui.debounce_ms = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Debounce"));
}

#[test]
fn test_config_save_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut config = Config::default();
    config.ui.debounce_ms = 450;
    config.save_to_file(config_path.to_str().unwrap()).unwrap();

    let loaded = Config::from_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.ui.debounce_ms, 450);
    assert_eq!(loaded.server_url, config.server_url);
}
