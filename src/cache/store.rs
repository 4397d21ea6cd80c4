//! Cache store for persisting fetched birthday pages to disk
//!
//! Provides a `CacheStore` that keeps one gzip-compressed file per
//! (day, month) key and answers freshness queries from file age, so a page
//! is only re-fetched once its cache entry has outlived the configured
//! freshness window.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use directories::ProjectDirs;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur in the cache layer
#[derive(Debug, Error)]
pub enum CacheError {
    /// No entry exists for the requested key
    #[error("no cached page for '{0}'")]
    NotFound(String),

    /// The stored entry could not be decompressed
    #[error("cached page for '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: io::Error,
    },

    /// Underlying filesystem failure
    #[error("cache I/O failed: {0}")]
    Io(#[from] io::Error),

    /// No platform cache directory could be determined
    #[error("could not determine a cache directory")]
    DirUnavailable,
}

impl CacheError {
    /// Short label identifying the error category, used for top-level reporting
    pub fn kind(&self) -> &'static str {
        match self {
            CacheError::NotFound(_) => "NotFoundError",
            CacheError::Corrupt { .. } => "CorruptDataError",
            CacheError::Io(_) | CacheError::DirUnavailable => "IoError",
        }
    }
}

/// Manages reading and writing cached birthday pages on disk
///
/// Each entry is a single gzip-compressed file named after its key in an
/// XDG-compliant cache directory (`~/.cache/aniday/` on Linux). The entry's
/// creation time is the file's modification time; freshness is evaluated
/// against it in [`CacheStore::is_fresh`]. Entries are replaced wholesale on
/// every write and never deleted by this layer.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Directory where cache files are stored
    cache_dir: PathBuf,
}

impl CacheStore {
    /// Creates a new CacheStore using the XDG-compliant cache directory
    ///
    /// Returns `None` if the cache directory cannot be determined (e.g., no
    /// home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "aniday")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new CacheStore with a custom cache directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the cache file for the given key
    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.html.gz", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Reports whether a usable entry younger than `window` exists for `key`
    ///
    /// Returns `false` when no entry exists or its age cannot be determined.
    /// An entry is fresh while its age is strictly below the window; at
    /// `age >= window` it is stale and must be re-fetched.
    pub fn is_fresh(&self, key: &str, window: Duration) -> bool {
        let Ok(metadata) = fs::metadata(self.entry_path(key)) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        age < window
    }

    /// Reads and decompresses the entry for `key`
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - The decompressed payload exactly as written
    /// * `Err(CacheError::NotFound)` - No entry exists for the key
    /// * `Err(CacheError::Corrupt)` - The entry is not valid gzip data
    pub fn read(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        let compressed = match fs::read(self.entry_path(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound(key.to_string()));
            }
            Err(err) => return Err(CacheError::Io(err)),
        };

        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut document = Vec::new();
        decoder
            .read_to_end(&mut document)
            .map_err(|source| CacheError::Corrupt {
                key: key.to_string(),
                source,
            })?;
        Ok(document)
    }

    /// Compresses `document` and stores it as the entry for `key`
    ///
    /// Replaces any prior entry. The payload is written to a temporary file
    /// in the cache directory and renamed into place, so a crash mid-write
    /// never leaves a truncated entry readable by a later [`CacheStore::read`].
    /// Creates the cache directory on first use.
    pub fn write(&self, key: &str, document: &[u8]) -> Result<(), CacheError> {
        self.ensure_dir()?;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(document)?;
        let compressed = encoder.finish()?;

        let path = self.entry_path(key);
        let staging = path.with_extension("tmp");
        fs::write(&staging, &compressed)?;
        fs::rename(&staging, &path)?;
        debug!(key, bytes = document.len(), "cached page written");
        Ok(())
    }
}
