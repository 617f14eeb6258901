//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! attributes, host-provided config) from page and component logic to keep
//! state code testable outside the browser.

pub mod config;
pub mod dark_mode;
pub mod preference_store;
