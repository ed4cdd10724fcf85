//! Configuration management for the Cadastro server.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally read from a `.env` file first.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration for the Cadastro server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on (default: 127.0.0.1:8080)
    pub bind_addr: SocketAddr,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Register a demo customer at startup (default: false)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CADASTRO_BIND_ADDR`: listen address (default: 127.0.0.1:8080)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `CADASTRO_SEED_DEMO`: `true`/`false` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let bind_addr = match env::var("CADASTRO_BIND_ADDR") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "CADASTRO_BIND_ADDR".to_string(),
                reason: format!(
                    "Must be a socket address like {}, got: {}",
                    DEFAULT_BIND_ADDR, val
                ),
            })?,
            Err(_) => Self::default().bind_addr,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let seed_demo = Self::parse_env_bool("CADASTRO_SEED_DEMO", false)?;

        Ok(Config {
            bind_addr,
            log_level,
            seed_demo,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            seed_demo: false,
        }
    }
}
