use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enforce_capacity: bool,
    pub require_email: bool,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            enforce_capacity: false,
            require_email: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `ROSTER_ENFORCE_CAPACITY`, `ROSTER_REQUIRE_EMAIL`
    /// and `ROSTER_LOG_FORMAT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
            None => defaults.port,
        };

        let enforce_capacity = match lookup("ROSTER_ENFORCE_CAPACITY") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidValue {
                key: "ROSTER_ENFORCE_CAPACITY",
                value: v,
            })?,
            None => defaults.enforce_capacity,
        };

        let require_email = match lookup("ROSTER_REQUIRE_EMAIL") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidValue {
                key: "ROSTER_REQUIRE_EMAIL",
                value: v,
            })?,
            None => defaults.require_email,
        };

        let log_format = match lookup("ROSTER_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "ROSTER_LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            enforce_capacity,
            require_email,
            log_format,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr(&self.host, self.port)
    }

    /// Next port up, tried once when the configured one is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ConfigError> {
        socket_addr(&self.host, self.port.saturating_add(1))
    }
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr, ConfigError> {
    let raw = format!("{}:{}", host, port);
    raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
