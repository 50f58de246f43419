use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::config::{ApiConfig, ViewConfig};

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Maximum level emitted: "error", "warn", "info", "debug" or "trace". Default: "info".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// CLI application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CliAppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl CliAppConfig {
    pub fn load(config_path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("api.base_url", "http://localhost:5096/api")?
            .set_default("api.timeout_secs", 30_i64)?
            .set_default("view.default_site", "Samaria")?
            .set_default("log.level", "info")?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("POZOS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
