use serde::Deserialize;

use crate::summary::TileFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// JSON file with the usage payload; the built-in sample is used when unset.
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default)]
    pub tile_format: TileFormat,
    /// Max number of view updates kept in the broadcast channel for /ws/dashboard (slow clients may lag).
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

fn default_broadcast_capacity() -> usize {
    16
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            tile_format: TileFormat::default(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// How often to log app stats (ws_dashboard clients, filters applied) at INFO level.
    #[serde(default = "default_stats_log_interval_secs")]
    pub stats_log_interval_secs: u64,
}

fn default_stats_log_interval_secs() -> u64 {
    60
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            stats_log_interval_secs: default_stats_log_interval_secs(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.trim().is_empty(),
            "server.host must be non-empty"
        );
        if let Some(path) = &self.dashboard.data_file {
            anyhow::ensure!(
                !path.trim().is_empty(),
                "dashboard.data_file must be non-empty when set"
            );
        }
        anyhow::ensure!(
            self.dashboard.broadcast_capacity > 0,
            "dashboard.broadcast_capacity must be > 0, got {}",
            self.dashboard.broadcast_capacity
        );
        anyhow::ensure!(
            self.monitoring.stats_log_interval_secs > 0,
            "monitoring.stats_log_interval_secs must be > 0, got {}",
            self.monitoring.stats_log_interval_secs
        );
        Ok(())
    }
}
