//! Client-side application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs wrapped in `RwSignal`s by the page and app
//! components. Each struct owns its transitions so they can be tested without
//! a reactive runtime.

pub mod browse;
pub mod detail;
pub mod movies;
pub mod theme;
