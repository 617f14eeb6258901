//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `MOVIE_API_BASE_URL`: movie API root, default [`catalog::DEFAULT_BASE_URL`]
//! - `MOVIE_API_KEY`: movie API key; when absent the page loads but the
//!   movie list fails to fetch

use catalog::{ApiConfig, DEFAULT_BASE_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Published to the browser through the HTML shell.
    pub api: ApiConfig,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build host config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid port.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let base_url = non_blank(lookup("MOVIE_API_BASE_URL")).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let api_key = lookup("MOVIE_API_KEY").unwrap_or_default();

        Ok(Self { port, api: ApiConfig::new(&base_url, &api_key) })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
