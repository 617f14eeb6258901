//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the movie table, detail overlay, and page chrome while
//! reading/writing state owned by the browse page or provided via context.

pub mod lazy_poster;
pub mod movie_detail_modal;
pub mod movie_table;
pub mod search_field;
pub mod spinner;
pub mod theme_toggle;
