use std::env;
use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("RHEUMA_PORT must be a valid port number: {0}")]
    InvalidPort(String),

    #[error("RHEUMA_HOST is not a valid IP address: {source}")]
    InvalidHost {
        #[from]
        source: std::net::AddrParseError,
    },

    #[error("RHEUMA_CORS_ORIGIN is not a valid header value: {0}")]
    InvalidCorsOrigin(String),
}

/// Process configuration, read from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            cors_origin: None,
        }
    }
}

impl ApiConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("RHEUMA_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let cors_origin = lookup("RHEUMA_CORS_ORIGIN")
            .filter(|origin| !origin.trim().is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin))
            })
            .transpose()?;

        Ok(Self {
            host: lookup("RHEUMA_HOST").unwrap_or(defaults.host),
            port,
            log_level: lookup("RHEUMA_LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }
        let ip: IpAddr = self.host.parse()?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
