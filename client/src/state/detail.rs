//! Detail overlay state: `Closed --row click--> Open --close--> Closed`.
//!
//! Clicking another row while open swaps the selected movie without passing
//! through `Closed`. Closing keeps the last selection; only `open` gates
//! visibility.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use catalog::Movie;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
    pub open: bool,
    pub selected: Option<Movie>,
}

impl DetailState {
    /// Row click: select `movie` and open (or stay open).
    pub fn select(&mut self, movie: Movie) {
        self.selected = Some(movie);
        self.open = true;
    }

    /// Close action.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// The movie to show, if the overlay is visible.
    pub fn visible(&self) -> Option<&Movie> {
        if self.open { self.selected.as_ref() } else { None }
    }

    pub fn is_open(&self) -> bool {
        self.visible().is_some()
    }
}
