use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::services::{ElasticsearchAuth, ElasticsearchIndices};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub elasticsearch: ElasticsearchSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElasticsearchSettings {
    pub url: String,
    #[serde(default = "default_candidates_index")]
    pub candidates_index: String,
    #[serde(default = "default_jobs_index")]
    pub jobs_index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_candidates_index() -> String { "candidates".to_string() }
fn default_jobs_index() -> String { "jobs".to_string() }

impl ElasticsearchSettings {
    pub fn indices(&self) -> ElasticsearchIndices {
        ElasticsearchIndices {
            candidates: self.candidates_index.clone(),
            jobs: self.jobs_index.clone(),
        }
    }

    /// API key wins over basic auth when both are configured
    pub fn auth(&self) -> ElasticsearchAuth {
        match (&self.api_key, &self.username) {
            (Some(key), _) => ElasticsearchAuth::ApiKey(key.clone()),
            (None, Some(username)) => ElasticsearchAuth::Basic {
                username: username.clone(),
                password: self.password.clone().unwrap_or_default(),
            },
            (None, None) => ElasticsearchAuth::None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

fn default_limit() -> u16 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT__)
    /// 5. `ES_URL`, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_es_url(settings, std::env::var("ES_URL").ok())?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TALENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// A bare `ES_URL` (as used by the cluster's docker-compose) overrides the
/// configured cluster address
fn apply_es_url(settings: Config, es_url: Option<String>) -> Result<Config, ConfigError> {
    match es_url {
        Some(url) if !url.is_empty() => Config::builder()
            .add_source(settings)
            .set_override("elasticsearch.url", url)?
            .build(),
        _ => Ok(settings),
    }
}
