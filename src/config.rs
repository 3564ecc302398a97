//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_READY_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// `LWMS_API_BASE_URL` is not an http(s) URL.
    #[error("invalid LWMS_API_BASE_URL '{0}': expected an http:// or https:// URL")]
    InvalidApiBase(String),

    /// `LWMS_READY_TIMEOUT_SECS` is not a positive number of seconds.
    #[error("invalid LWMS_READY_TIMEOUT_SECS '{0}'")]
    InvalidReadyTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Warehouse REST API base handed to the browser, without trailing `/`.
    pub api_base_url: String,
    pub ready_timeout_secs: u64,
}

impl Config {
    /// Build config from the environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LWMS_API_BASE_URL`: default `http://localhost:8080`
    /// - `LWMS_READY_TIMEOUT_SECS`: default 3
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let api_base_url = parse_api_base(std::env::var("LWMS_API_BASE_URL").ok().as_deref())?;
        let ready_timeout_secs = match std::env::var("LWMS_READY_TIMEOUT_SECS") {
            Ok(raw) => parse_ready_timeout(&raw)?,
            Err(_) => DEFAULT_READY_TIMEOUT_SECS,
        };

        Ok(Self { port, api_base_url, ready_timeout_secs })
    }
}

fn parse_ready_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidReadyTimeout(raw.to_owned())),
    }
}

fn parse_api_base(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(client::net::api::DEFAULT_API_BASE_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
