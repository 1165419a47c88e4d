//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use chrono::TimeDelta;
use thiserror::Error;

use sns_infra::{DatabaseConfig, JwtConfig};

/// Longest accepted token lifetime: ten years.
const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 24 * 60 * 60;

/// Startup configuration failures. Always fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let ttl_secs: i64 = parse_required(&lookup, "JWT_TOKEN_TTL_SECS")?;
        if ttl_secs <= 0 {
            return Err(ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_SECS",
                reason: "must be a positive number of seconds".to_string(),
            });
        }
        let token_ttl = TimeDelta::try_seconds(ttl_secs)
            .filter(|_| ttl_secs <= MAX_TOKEN_TTL_SECS)
            .ok_or_else(|| ConfigError::Invalid {
                name: "JWT_TOKEN_TTL_SECS",
                reason: format!("must not exceed {MAX_TOKEN_TTL_SECS} seconds"),
            })?;

        let jwt = JwtConfig {
            secret,
            token_ttl,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "sns-api".to_string()),
        };

        let database = match lookup("DATABASE_URL") {
            Some(url) => {
                let max_connections: u32 = parse_or(&lookup, "DB_MAX_CONNECTIONS", 100)?;
                let min_connections: u32 =
                    parse_or(&lookup, "DB_MIN_CONNECTIONS", max_connections.min(10))?;
                if min_connections > max_connections {
                    return Err(ConfigError::Invalid {
                        name: "DB_MIN_CONNECTIONS",
                        reason: format!("must not exceed DB_MAX_CONNECTIONS ({max_connections})"),
                    });
                }
                Some(DatabaseConfig {
                    url,
                    max_connections,
                    min_connections,
                })
            }
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            jwt,
            database,
        })
    }
}

fn parse_required<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(name).ok_or(ConfigError::Missing(name))?;
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(_) => parse_required(lookup, name),
        None => Ok(default),
    }
}
