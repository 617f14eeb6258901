//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the single popular-movies request against the external
//! movie API configured by the host page.

pub mod api;
