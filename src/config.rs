use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Parser)]
#[command(name = "apartment_api")]
#[command(about = "Read-only REST API over apartment listings")]
pub struct Config {
    #[arg(long, env = "APP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long, env = "DATABASE_PATH", default_value = "apartments.sqlite3")]
    pub database: PathBuf,

    #[arg(long, env = "SCHEMA_PATH", default_value = "sql/schema.sql")]
    pub schema: PathBuf,

    #[arg(long, env = "APP_WORKERS", default_value_t = 8)]
    pub workers: usize,

    #[arg(long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address '{0}'")]
    BadAddress(String),

    #[error("workers must be at least 1")]
    NoWorkers,
}

impl Config {
    /// Loads `.env` if present, then parses flags with env fallbacks.
    pub fn load() -> Self {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Config::parse()
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::BadAddress(format!("{}:{}", self.host, self.port)))
    }

    pub fn validate(&self) -> Result<SocketAddr, ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        self.bind_addr()
    }
}
