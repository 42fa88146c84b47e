//! Server configuration, read from the environment.
//!
//! All three values are required; the server refuses to start without
//! them rather than limping along with half a database client.

use anyhow::{Result, bail};

pub const ENV_DB_URL: &str = "SHOPHUNT_DB_URL";
pub const ENV_ANON_KEY: &str = "SHOPHUNT_DB_ANON_KEY";
pub const ENV_SERVICE_KEY: &str = "SHOPHUNT_DB_SERVICE_KEY";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the hosted database's REST endpoint.
    pub db_url: String,
    /// Standard-authorization API key (public read paths).
    pub anon_key: String,
    /// Elevated-authorization API key (admin write paths). Never sent
    /// to clients.
    pub service_key: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| -> Result<String> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => bail!("missing required environment variable {name}"),
            }
        };
        Ok(Self {
            db_url: require(ENV_DB_URL)?,
            anon_key: require(ENV_ANON_KEY)?,
            service_key: require(ENV_SERVICE_KEY)?,
        })
    }
}
