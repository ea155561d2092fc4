//! roster-core — record model, store, and errors.
//!
//! This crate defines the session-scoped student record store that the
//! rest of the roster workspace builds on.

pub mod error;
pub mod model;
pub mod store;
