// Service configuration, read from the environment.
//
// Keys
// - USERS_API_HOST: interface to bind, defaults to 0.0.0.0.
// - USERS_API_PORT: TCP port, defaults to 8080.
// - USERS_API_MAX_BODY_BYTES: largest accepted request body, defaults to 2 MiB.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

pub const HOST_KEY: &str = "USERS_API_HOST";
pub const PORT_KEY: &str = "USERS_API_PORT";
pub const MAX_BODY_BYTES_KEY: &str = "USERS_API_MAX_BODY_BYTES";

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing keys fall back
    /// to their defaults; present but unparsable keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_or(&lookup, HOST_KEY, defaults.host)?,
            port: parse_or(&lookup, PORT_KEY, defaults.port)?,
            max_body_bytes: parse_or(&lookup, MAX_BODY_BYTES_KEY, defaults.max_body_bytes)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
