use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Create missing tables and indexes at startup
    pub init_schema: bool,
    pub db_max_connections: u32,
    /// Sustained requests per second allowed per client IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            port: parse_or(&lookup, "PORT", 8080)?,
            init_schema: parse_or(&lookup, "INIT_SCHEMA", false)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            rate_limit_per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", 20)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
