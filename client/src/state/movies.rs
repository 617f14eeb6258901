//! Fetched movie list and loading status.
//!
//! DESIGN
//! ======
//! The fetch result lands through a single [`MoviesState::apply_fetch`]
//! call, so the list and the loading flag change in one signal update and the
//! view never sees a settled-but-stale list.

#[cfg(test)]
#[path = "movies_test.rs"]
mod movies_test;

use catalog::{FetchError, Movie};

#[derive(Clone, Debug, PartialEq)]
pub struct MoviesState {
    /// Movies in API response order. Replaced wholesale on each fetch.
    pub movies: Vec<Movie>,
    /// True from mount until the fetch settles.
    pub loading: bool,
}

impl Default for MoviesState {
    fn default() -> Self {
        Self { movies: Vec::new(), loading: true }
    }
}

impl MoviesState {
    /// Settle the fetch. Failures are logged and leave the list empty.
    pub fn apply_fetch(&mut self, result: Result<Vec<Movie>, FetchError>) {
        match result {
            Ok(movies) => self.movies = movies,
            Err(e) => {
                leptos::logging::error!("Error fetching movies: {e}");
                self.movies.clear();
            }
        }
        self.loading = false;
    }
}
