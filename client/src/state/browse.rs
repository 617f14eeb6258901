//! Search text and table pagination owned by the browse view.
//!
//! DESIGN
//! ======
//! The filtered list is never stored as movies. The page memoizes match
//! positions from [`catalog::matching_indices`] over the fetched list and the
//! search text, then resolves the current page with [`BrowseState::page_rows`].

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use catalog::{Movie, Pager};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseState {
    /// Raw search input. Empty means no filter.
    pub search: String,
    pub pager: Pager,
}

impl BrowseState {
    /// Replace the search text. A changed term returns to the first page.
    pub fn set_search(&mut self, term: String) {
        if self.search != term {
            self.search = term;
            self.pager.reset();
        }
    }

    /// Change rows-per-page; ignored for unsupported sizes.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.pager.set_page_size(size)
    }

    /// Movies on the current page, given the match positions into `movies`.
    ///
    /// Positions past the end of `movies` (a list replaced after the match
    /// set was computed) are skipped.
    pub fn page_rows<'a>(&self, movies: &'a [Movie], matches: &[usize]) -> Vec<&'a Movie> {
        self.pager.slice(matches).iter().filter_map(|&i| movies.get(i)).collect()
    }
}
