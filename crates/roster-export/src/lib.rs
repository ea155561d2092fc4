//! roster-export — CSV and JSON serialization of a store's records.
//!
//! Export functions take any iterator of records so callers can pass
//! `RecordStore::list()` directly.

pub mod csv;
pub mod json;
