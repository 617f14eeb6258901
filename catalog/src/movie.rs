//! Movie records as returned by the popular-movies endpoint.
//!
//! DESIGN
//! ======
//! Only `id` is mandatory on a movie. Every display field falls back to an
//! empty/zero value when missing or `null`, so one bad record never rejects
//! the whole page. A body without a `results` array is rejected.

#[cfg(test)]
#[path = "movie_test.rs"]
mod movie_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::api::FetchError;

/// A single movie row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier, unique within one fetch.
    pub id: u64,
    /// Relative poster path on the image CDN (e.g. `"/x.jpg"`).
    #[serde(default, deserialize_with = "deserialize_poster_path")]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Release date as sent by the API (`YYYY-MM-DD`), possibly empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    /// Synopsis text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub overview: String,
}

impl Movie {
    /// Rating text for the numeric column and the detail overlay.
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.vote_average.to_string()
    }
}

/// One page of the popular-movies listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopularPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Decode a popular-movies response body into the movie list, preserving
/// response order.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON, lacks a `results`
/// array, or contains a result without a numeric `id`.
pub fn parse_popular_body(raw: &str) -> Result<Vec<Movie>, FetchError> {
    let page: PopularPage = serde_json::from_str(raw).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(page.results)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_poster_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|path| !path.trim().is_empty()))
}
