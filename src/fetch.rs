//! Birthday page client
//!
//! This module decides, for one (day, month) key, whether the page comes from
//! the local cache or from the remote site. A fresh cache entry is served
//! unchanged; otherwise the page is fetched, committed to the cache, and
//! returned. Remote failures surface immediately; there is no retry and no
//! fallback to a stale entry.

use std::time::Duration;

use reqwest::{header, Client};
use thiserror::Error;
use tracing::{debug, warn};

use crate::cache::{CacheError, CacheStore};
use crate::date::{BirthdayDate, DateError};

/// Base URL of the birthday listing endpoint
const BIRTHDAYS_BASE_URL: &str = "https://www.animecharactersdatabase.com/birthdays.php";

/// Browser-like User-Agent; the site rejects unidentified clients
const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10.0; 00-AAAAAA) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/109.0.0.0 Mobile Safari/537.36";

/// Errors that can occur while resolving a birthday page
#[derive(Debug, Error)]
pub enum FetchError {
    /// Day or month was outside the accepted range
    #[error(transparent)]
    InvalidDate(#[from] DateError),

    /// The remote request failed or returned a non-success status
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The cache layer failed
    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl FetchError {
    /// Short label identifying the error category, used for top-level reporting
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidDate(_) => "InvalidArgumentError",
            FetchError::Request(_) => "FetchError",
            FetchError::Cache(err) => err.kind(),
        }
    }
}

/// Client for resolving birthday pages through the cache
#[derive(Debug, Clone)]
pub struct BirthdayClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Store holding one compressed page per date
    store: CacheStore,
    /// Base URL for the endpoint (allows override for testing)
    base_url: String,
}

impl BirthdayClient {
    /// Creates a new BirthdayClient over the given cache store
    pub fn new(store: CacheStore) -> Self {
        Self {
            http_client: Client::new(),
            store,
            base_url: BIRTHDAYS_BASE_URL.to_string(),
        }
    }

    /// Creates a new BirthdayClient with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(store: CacheStore, base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            store,
            base_url,
        }
    }

    /// Resolves the page for `date`, serving from cache when the entry is
    /// younger than `window`
    ///
    /// # Behavior
    /// - A fresh, readable cache entry is returned as-is, byte for byte.
    /// - A fresh but unreadable entry (e.g. truncated or corrupt on disk) is
    ///   treated as a miss and refetched rather than surfaced as an error.
    /// - On a miss or stale entry the page is fetched with the browser
    ///   User-Agent, written through the store, and returned. A failed fetch
    ///   leaves the cache untouched.
    pub async fn resolve(
        &self,
        date: &BirthdayDate,
        window: Duration,
    ) -> Result<String, FetchError> {
        let key = date.cache_key();

        if self.store.is_fresh(&key, window) {
            match self.store.read(&key) {
                Ok(document) => {
                    debug!(%date, "serving cached page");
                    return Ok(String::from_utf8_lossy(&document).into_owned());
                }
                Err(err) => {
                    warn!(%date, error = %err, "cached page unreadable, refetching");
                }
            }
        }

        let url = format!(
            "{}?theday={}&themonth={}",
            self.base_url,
            date.day(),
            date.month_name()
        );
        debug!(%url, "requesting birthday page");
        let response = self
            .http_client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?;
        let bytes = response.bytes().await?;

        self.store.write(&key, &bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
