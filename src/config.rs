use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{SimilarityEngine, DEFAULT_NGRAM_SIZE};
use crate::error::SimilarityError;
use crate::models::SchemeKind;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Classifier selection. Weights are fixed per preset; only the default
/// preset and the n-gram length are configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    #[serde(default = "default_ngram_size")]
    pub ngram_size: usize,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            ngram_size: default_ngram_size(),
            parallel: default_parallel(),
        }
    }
}

fn default_scheme() -> String { SchemeKind::FourMetric.as_str().to_string() }
fn default_ngram_size() -> usize { DEFAULT_NGRAM_SIZE }
fn default_parallel() -> bool { true }

impl MatchingSettings {
    /// Build an engine from these settings, rejecting unknown schemes and n = 0
    pub fn build_engine(&self) -> Result<SimilarityEngine, SimilarityError> {
        let scheme: SchemeKind = self.default_scheme.parse()?;
        SimilarityEngine::new(scheme, self.ngram_size, self.parallel)
    }
}

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
    /// 4. Environment variables (prefixed with LUME_SIM)
    pub fn load() -> Result<Self, SimilarityError> {
        let settings = with_server_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUME_SIM__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SimilarityError> {
        let settings = with_server_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject matching settings the engine cannot run with
    pub fn validate(&self) -> Result<(), SimilarityError> {
        self.matching.build_engine().map(|_| ())
    }
}

/// A config source without a `[server]` table still yields a server section
fn with_server_defaults(builder: ConfigBuilder<DefaultState>) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("server.host", default_host())?
        .set_default("server.port", default_port() as i64)
}

fn env_source() -> Environment {
    Environment::with_prefix("LUME_SIM")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
