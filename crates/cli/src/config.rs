//! Connection settings for the CLI
//!
//! Loaded once from the `T8_*` environment variables at startup and passed
//! by reference into the API client; nothing reads the environment after
//! this point.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Connection settings for the T8 server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server address as `host:port`
    pub host: String,
    /// HTTP Basic auth user
    pub user: String,
    /// HTTP Basic auth password
    pub password: String,
}

impl Config {
    /// Load settings from `T8_HOST`, `T8_USER` and `T8_PASSWORD`.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("T8"))
            .build()
            .context("failed to read environment")?;

        settings.try_deserialize().context(
            "connection settings incomplete: set T8_HOST (host:port), T8_USER and T8_PASSWORD",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_from_t8_environment_variables() {
        std::env::set_var("T8_HOST", "t8.example.com:8080");
        std::env::set_var("T8_USER", "operator");
        std::env::set_var("T8_PASSWORD", "secret");

        let config = Config::load().unwrap();
        assert_eq!(config.host, "t8.example.com:8080");
        assert_eq!(config.user, "operator");
        assert_eq!(config.password, "secret");
    }
}
