// Config loading and validation tests

use usage_dashboard::config::AppConfig;
use usage_dashboard::summary::TileFormat;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[dashboard]
data_file = "data/usage_data.json"
tile_format = "per_metric"
broadcast_capacity = 8

[monitoring]
stats_log_interval_secs = 30
"#;

const MINIMAL_CONFIG: &str = r#"
[server]
port = 8081
host = "127.0.0.1"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(
        config.dashboard.data_file.as_deref(),
        Some("data/usage_data.json")
    );
    assert_eq!(config.dashboard.tile_format, TileFormat::PerMetric);
    assert_eq!(config.dashboard.broadcast_capacity, 8);
    assert_eq!(config.monitoring.stats_log_interval_secs, 30);
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("minimal");
    assert!(config.dashboard.data_file.is_none());
    assert_eq!(config.dashboard.tile_format, TileFormat::Legacy);
    assert_eq!(config.dashboard.broadcast_capacity, 16);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_empty_data_file() {
    let bad = VALID_CONFIG.replace("data_file = \"data/usage_data.json\"", "data_file = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("dashboard.data_file"));
}

#[test]
fn test_config_validation_rejects_broadcast_capacity_zero() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 8", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("broadcast_capacity"));
}

#[test]
fn test_config_validation_rejects_stats_log_interval_zero() {
    let bad = VALID_CONFIG.replace(
        "stats_log_interval_secs = 30",
        "stats_log_interval_secs = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stats_log_interval_secs"));
}

#[test]
fn test_config_rejects_unknown_tile_format() {
    let bad = VALID_CONFIG.replace("tile_format = \"per_metric\"", "tile_format = \"fancy\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.dashboard.broadcast_capacity, 8);
}
