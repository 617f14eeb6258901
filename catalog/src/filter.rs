//! Case-insensitive title search over the fetched movie list.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::movie::Movie;

/// Return the movies whose title contains `term`, ignoring case.
///
/// An empty `term` matches everything. The result borrows from `movies` and
/// keeps their relative order.
#[must_use]
pub fn filter_by_title<'a>(movies: &'a [Movie], term: &str) -> Vec<&'a Movie> {
    matching_indices(movies, term).into_iter().map(|i| &movies[i]).collect()
}

/// Positions in `movies` of the titles matching `term`, ascending.
///
/// Same matching rule as [`filter_by_title`]; lets reactive callers keep the
/// match set without holding borrows or copies of the movies.
#[must_use]
pub fn matching_indices(movies: &[Movie], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..movies.len()).collect();
    }
    let needle = term.to_lowercase();
    movies
        .iter()
        .enumerate()
        .filter(|(_, movie)| movie.title.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}
