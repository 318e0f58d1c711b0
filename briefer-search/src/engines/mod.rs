//! Search API backends.
//!
//! Each module provides a struct implementing [`crate::engine::SearchBackend`].

pub mod google;

pub use google::GoogleSearch;
