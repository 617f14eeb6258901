//! Movie API configuration, endpoint paths, and fetch failures.
//!
//! ERROR HANDLING
//! ==============
//! Every way the popular-movies request can go wrong maps onto one
//! [`FetchError`] variant. Callers log it and fall back to an empty list;
//! none of them is fatal to the UI.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Public movie API root used when the host does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "api_key";

/// Error returned by the popular-movies fetch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// A required configuration value is empty.
    #[error("movie api is not configured: missing {0}")]
    NotConfigured(&'static str),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The body was not a popular-movies page.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Where and how to reach the movie API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    /// Build a config, trimming whitespace and trailing slashes from the base URL.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            api_key: api_key.trim().to_owned(),
        }
    }

    /// Check that both values are present.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotConfigured`] naming the first empty value.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.base_url.is_empty() {
            return Err(FetchError::NotConfigured("base url"));
        }
        if self.api_key.is_empty() {
            return Err(FetchError::NotConfigured("api key"));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }
}

/// URL of the popular-movies route, without the key query parameter.
#[must_use]
pub fn popular_movies_url(base_url: &str) -> String {
    format!("{}/movie/popular", base_url.trim_end_matches('/'))
}
