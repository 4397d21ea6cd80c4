//! Cache module for storing fetched pages to disk
//!
//! This module provides a cache store that persists raw birthday pages to the
//! filesystem as gzip-compressed files, one per (day, month) key, and answers
//! freshness queries so the fetch layer can decide between serving from disk
//! and going to the network.

mod store;

pub use store::{CacheError, CacheStore};
