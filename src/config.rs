//! Persisted settings for aniday
//!
//! Settings hold the text-styling directives and the cache freshness window.
//! They are loaded leniently from a JSON file in the platform config
//! directory (a missing or malformed file falls back to defaults) and written
//! back exactly once at shutdown through [`SettingsGuard`], on both normal
//! and error exit paths.

use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// User-configurable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Text styling directives
    #[serde(default)]
    pub style: StyleSettings,
    /// Cache behavior
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Style directives for the heading line and the character names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    /// Directive applied to the date heading
    #[serde(default = "default_head_style")]
    pub head: String,
    /// Directive applied to each character name
    #[serde(default = "default_name_style")]
    pub name: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            head: default_head_style(),
            name: default_name_style(),
        }
    }
}

fn default_head_style() -> String {
    "bold+bright+blue".to_string()
}

fn default_name_style() -> String {
    "bold+underline+green".to_string()
}

/// Cache-related settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    /// Maximum age at which a cached page is still served
    #[serde(default)]
    pub window: FreshnessWindow,
}

/// Maximum cache entry age, split into calendar-ish components
///
/// Defaults to 5 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessWindow {
    #[serde(default)]
    pub days: u64,
    #[serde(default)]
    pub hours: u64,
    #[serde(default)]
    pub minutes: u64,
    #[serde(default)]
    pub seconds: u64,
}

impl Default for FreshnessWindow {
    fn default() -> Self {
        Self {
            days: 5,
            hours: 0,
            minutes: 0,
            seconds: 0,
        }
    }
}

impl FreshnessWindow {
    /// Total duration of the window
    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(
            self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds,
        )
    }
}

impl Settings {
    /// Loads settings from the platform config directory
    ///
    /// A missing file, an undeterminable config directory, or a malformed
    /// file all yield the defaults; a malformed file is additionally logged.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads settings from a specific file path
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
            Self::default()
        })
    }

    /// Saves settings to the platform config directory
    pub fn save(&self) -> io::Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a config directory",
            )
        })?;
        self.save_to(&path)
    }

    /// Saves settings to a specific file path, creating parent directories
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, content)
    }

    /// Path of the settings file, if a config directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("", "", "aniday")?;
        Some(dirs.config_dir().join("config.json"))
    }
}

/// Owns the settings for the duration of a run and persists them on drop
///
/// The guard dereferences to [`Settings`] for reading. Persisting in `Drop`
/// guarantees the save runs exactly once whether the run succeeds or fails,
/// as long as the guard is dropped before the process exits.
pub struct SettingsGuard {
    settings: Settings,
}

impl SettingsGuard {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Deref for SettingsGuard {
    type Target = Settings;

    fn deref(&self) -> &Settings {
        &self.settings
    }
}

impl Drop for SettingsGuard {
    fn drop(&mut self) {
        if let Err(err) = self.settings.save() {
            warn!(error = %err, "failed to persist settings");
        }
    }
}
