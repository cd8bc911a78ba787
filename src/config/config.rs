// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database path for the cafe store
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// HTTP bind address (e.g., "127.0.0.1:5000")
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// Secret used to sign CSRF tokens
    #[serde(default = "generate_secret_key")]
    pub secret_key: String,

    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("cafes.db")
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

fn default_log_level() -> String {
    String::from("info")
}

/// A fresh per-process secret, used when none is configured.
fn generate_secret_key() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as `load`, reading variables through `env`.
    pub fn load_with<F>(env: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = env("CAFE_CONFIG").unwrap_or_else(|| "config.toml".to_string());

        let mut config: Config = if std::path::Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        if let Some(val) = env("CAFE_DATABASE_PATH") {
            config.database_path = PathBuf::from(val);
        }
        if let Some(val) = env("CAFE_BIND_ADDR") {
            config.bind_addr = SocketAddr::from_str(&val)?;
        }
        if let Some(val) = env("CAFE_SECRET_KEY") {
            config.secret_key = val;
        }
        if let Some(val) = env("CAFE_LOG_LEVEL") {
            config.log_level = val;
        }
        if let Some(val) = env("CAFE_LOG_JSON") {
            config.log_json = val.parse()?;
        }

        if config.secret_key.is_empty() {
            anyhow::bail!("secret_key must not be empty");
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            bind_addr: default_bind_addr(),
            secret_key: generate_secret_key(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}
