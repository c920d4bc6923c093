use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: saude.db)
    pub database_path: PathBuf,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Optional log file; stdout when unset
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("saude.db"));

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(raw) => raw
                .parse::<log::LevelFilter>()
                .map_err(|_| ServerError::InvalidLogLevel { value: raw.clone() })?,
            Err(_) => log::LevelFilter::Info,
        };

        let log_colored = std::env::var("LOG_COLORED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let log_file = std::env::var("LOG_FILE").ok().map(PathBuf::from);

        Ok(Self {
            bind_addr,
            database_path,
            log_level,
            log_colored,
            log_file,
        })
    }
}
