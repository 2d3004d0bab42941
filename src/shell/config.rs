// Runtime configuration read from the environment.
//
// Responsibilities
// - Load a .env file when one exists, then read TIME_RECORDER_* variables with defaults.
// - Reject values that do not parse instead of silently falling back.

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "TIME_RECORDER_API_URL";
pub const BIND_VAR: &str = "TIME_RECORDER_BIND";
pub const TIMEOUT_VAR: &str = "TIME_RECORDER_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:3002";
const DEFAULT_BIND: &str = "127.0.0.1:3002";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBind { var: &'static str, value: String },

    #[error("{var} is not a whole number of seconds: {value}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("cannot read .env: {0}")]
    DotEnv(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: String,
    pub bind: SocketAddr,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        accept_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if api_url.trim().is_empty() {
            return Err(ConfigError::Empty { var: API_URL_VAR });
        }

        let bind_value = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                var: BIND_VAR,
                value: bind_value.clone(),
            })?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        // reqwest fails every request on a zero timeout.
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                var: TIMEOUT_VAR,
                value: "0".to_string(),
            });
        }

        Ok(Self {
            api_url,
            bind,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// A missing .env file is the normal case; a malformed one is not.
fn accept_dotenv(loaded: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match loaded {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::DotEnv(err.to_string())),
    }
}
