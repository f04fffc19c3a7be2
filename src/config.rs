//! Configuration management for the Books API

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the two sample books
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode, env::var("PORT").ok())
    }

    /// Load from `{dir}/default` and `{dir}/{run_mode}`, both optional, then `BOOKS_*`
    /// environment variables and finally the `port` override.
    pub fn load_from(dir: &str, run_mode: &str, port: Option<String>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Environment variables with prefix BOOKS_ (e.g. BOOKS_SERVER_PORT)
            .add_source(
                Environment::with_prefix("BOOKS")
                    .separator("_")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}
