use std::env;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Upper bound on pooled connections shared by all requests
    pub max_connections: u32,
    /// How long a checkout may wait on an item row lock before it aborts
    pub lock_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any name -> value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_var("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let lock_timeout = lookup("STOCK_LOCK_TIMEOUT_MS")
            .map(|raw| match parse_var::<u64>("STOCK_LOCK_TIMEOUT_MS", &raw)? {
                // PostgreSQL reads a zero lock_timeout as "wait forever"
                0 => Err(ConfigError::Invalid {
                    name: "STOCK_LOCK_TIMEOUT_MS",
                    value: raw,
                }),
                ms => Ok(Duration::from_millis(ms)),
            })
            .transpose()?;

        Ok(Self {
            database_url,
            max_connections,
            lock_timeout,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}
