//! Popular-movies request against the external movie API.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR) and native tests: the request is unavailable and
//! resolves to a transport error, since the list is only fetched in the
//! browser after mount.
//!
//! ERROR HANDLING
//! ==============
//! One attempt, no retry, no timeout beyond the browser's own. Every failure
//! comes back as a [`FetchError`] for the caller to log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{ApiConfig, FetchError, Movie};

/// Fetch the popular-movies list: `GET {base}/movie/popular?api_key={key}`.
///
/// # Errors
///
/// Returns [`FetchError::NotConfigured`] before any request if the base URL
/// or key is empty, and the transport/status/decode variants for failures of
/// the request itself.
pub async fn fetch_popular_movies(config: &ApiConfig) -> Result<Vec<Movie>, FetchError> {
    config.validate()?;
    #[cfg(feature = "hydrate")]
    {
        let url = catalog::popular_movies_url(&config.base_url);
        let resp = gloo_net::http::Request::get(&url)
            .query([(catalog::api::API_KEY_PARAM, config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Transport(e.to_string()))?;
        catalog::parse_popular_body(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Transport(NOT_IN_BROWSER.to_owned()))
    }
}

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available outside the browser";
