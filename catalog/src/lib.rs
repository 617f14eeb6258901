//! Shared movie-catalog model for the browser UI and its host.
//!
//! This crate owns everything about the popular-movies listing that does not
//! touch the DOM or the network: the `Movie` record and its lenient decoding,
//! the title search filter, table pagination, poster CDN URLs, the light/dark
//! theme model, and the fetch error taxonomy. Both `client` and `server`
//! depend on it so the two sides agree on names and defaults.

pub mod api;
pub mod filter;
pub mod movie;
pub mod pager;
pub mod poster;
pub mod theme;

pub use api::{ApiConfig, DEFAULT_BASE_URL, FetchError, popular_movies_url};
pub use filter::{filter_by_title, matching_indices};
pub use movie::{Movie, PopularPage, parse_popular_body};
pub use pager::{PAGE_SIZE_OPTIONS, Pager};
pub use poster::{PosterSize, poster_url};
pub use theme::{THEME_STORAGE_KEY, Theme, ThemeMode};
