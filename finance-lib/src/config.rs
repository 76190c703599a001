use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};
use tracing::level_filters::LevelFilter;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub database_url: String,
    pub signups_enabled: bool,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Origins allowed to call the API from a browser. Empty means same-origin only.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::parse(&config)
    }

    pub fn parse(config: &str) -> Result<Config, anyhow::Error> {
        toml::from_str(config).context("Unable to parse config")
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let signups_enabled = read_env("SIGNUPS_ENABLED")?;
        let signups_enabled = signups_enabled
            .parse()
            .context("Unable to parse SIGNUPS_ENABLED value")?;
        let database_url = read_env("DATABASE_URL")?;
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| default_bind_address());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let config = Config {
            database_url,
            signups_enabled,
            bind_address,
            log_level,
            allowed_origins,
        };
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, anyhow::Error> {
        self.log_level
            .parse()
            .with_context(|| format!("Invalid log level: {}", self.log_level))
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
