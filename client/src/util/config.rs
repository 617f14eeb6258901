//! Movie API configuration published by the host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the base URL and key into `<meta>` tags in the HTML
//! shell. After hydration the client reads them back once at startup and
//! provides the resulting [`ApiConfig`] through context. Missing tags produce
//! an unconfigured value; the fetch then fails and is logged like any other
//! fetch failure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use catalog::ApiConfig;

/// `<meta name=...>` carrying the API base URL.
pub const META_BASE_URL: &str = "movie-api-base-url";
/// `<meta name=...>` carrying the API key.
pub const META_API_KEY: &str = "movie-api-key";

/// Build an [`ApiConfig`] from raw meta values.
pub fn from_meta(base_url: Option<&str>, api_key: Option<&str>) -> ApiConfig {
    ApiConfig::new(base_url.unwrap_or_default(), api_key.unwrap_or_default())
}

/// Read the API config from the current document.
pub fn read_api_config() -> ApiConfig {
    #[cfg(feature = "hydrate")]
    {
        from_meta(read_meta(META_BASE_URL).as_deref(), read_meta(META_API_KEY).as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ApiConfig::default()
    }
}

#[cfg(feature = "hydrate")]
fn read_meta(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten()?;
    el.get_attribute("content")
}
