use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

use crate::middleware::RateLimit;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub expander: ExpanderConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    /// Requests each client IP may send to `/api` per window.
    #[serde(default = "default_rate_limit_requests")]
    pub rate_limit_requests: u32,
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
}

impl ServerConfig {
    pub fn rate_limit(&self) -> RateLimit {
        RateLimit {
            requests: self.rate_limit_requests,
            window: Duration::from_secs(self.rate_limit_window_secs),
        }
    }
}

fn default_rate_limit_requests() -> u32 {
    RateLimit::default().requests
}

fn default_rate_limit_window_secs() -> u64 {
    RateLimit::default().window.as_secs()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpanderConfig {
    #[serde(default = "default_expander_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_expander_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Language the generated details should be written in.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_expander_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_expander_endpoint(),
            model: default_expander_model(),
            api_key: None,
            language: None,
            timeout_secs: default_expander_timeout_secs(),
        }
    }
}

impl ExpanderConfig {
    pub fn settings(&self) -> mealweek_expander::Settings {
        mealweek_expander::Settings {
            endpoint: self.endpoint.to_owned(),
            model: self.model.to_owned(),
            api_key: self.api_key.to_owned(),
            language: self.language.to_owned(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

fn default_expander_endpoint() -> String {
    mealweek_expander::DEFAULT_ENDPOINT.to_string()
}

fn default_expander_model() -> String {
    mealweek_expander::DEFAULT_MODEL.to_string()
}

fn default_expander_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (DATABASE_URL, PORT, CORS_ORIGIN, HUGGINGFACE_API_KEY)
    /// 2. Environment variables (MEALWEEK__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.cors_origin", "http://localhost:5173")?
            .set_default("database.url", "sqlite:mealweek.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALWEEK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(cors_origin) = env::var("CORS_ORIGIN") {
            builder = builder.set_override("server.cors_origin", cors_origin)?;
        }
        if let Ok(api_key) = env::var("HUGGINGFACE_API_KEY") {
            builder = builder.set_override("expander.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.rate_limit_requests == 0 {
            return Err("Server rate_limit_requests must be at least 1".to_string());
        }
        if self.server.rate_limit_window_secs == 0 {
            return Err("Server rate_limit_window_secs must be greater than 0".to_string());
        }
        if self.expander.timeout_secs == 0 {
            return Err("Expander timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}
