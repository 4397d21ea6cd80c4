//! Aniday library
//!
//! This module exposes the cache, fetch, extraction, and configuration
//! modules for use in integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod date;
pub mod extract;
pub mod fetch;
pub mod style;
