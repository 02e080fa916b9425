//! Theme selection and persistence.
//!
//! The visitor picks `light`, `dark` or `system`. The choice is persisted
//! under a fixed storage key and restored on the next load without asking the
//! environment again; only `system` consults the operating environment's
//! color-scheme preference. The resolved scheme is applied as a `light` or
//! `dark` class on the document root.
//!
//! Storage and environment are injected ([`ThemeStorage`],
//! [`ColorSchemePreference`]) so tests can substitute fakes. The browser side
//! of this contract lives in `static/site.js` over `localStorage`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown theme: {0:?} (expected light, dark or system)")]
    Unknown(String),
}

/// A theme choice as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ThemeError::Unknown(other.to_string())),
        }
    }
}

/// The scheme actually applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    /// CSS class toggled on the document root.
    pub fn root_class(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

/// Durable key-value storage for the theme choice.
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The operating environment's color-scheme preference.
pub trait ColorSchemePreference {
    fn prefers_dark(&self) -> bool;
}

/// In-memory storage. Used when rendering, where nothing outlives the build.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a JSON object on disk.
///
/// Every `set` rewrites the file, so a new `FileStorage` over the same path
/// sees the previous process's writes.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, values }
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

/// A fixed preference, for rendering and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPreference(pub ResolvedTheme);

impl ColorSchemePreference for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0 == ResolvedTheme::Dark
    }
}

/// Owns the current theme choice for the lifetime of the process.
pub struct ThemeController<S, P> {
    storage: S,
    preference: P,
    storage_key: String,
    theme: Theme,
}

impl<S: ThemeStorage, P: ColorSchemePreference> ThemeController<S, P> {
    /// Restore the stored choice, or fall back to `default`.
    ///
    /// A stored value that is not a known theme is ignored.
    pub fn new(storage: S, preference: P, storage_key: &str, default: Theme) -> Self {
        let theme = storage
            .get(storage_key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default);
        Self {
            storage,
            preference,
            storage_key: storage_key.to_string(),
            theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch theme and persist the choice.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), ThemeError> {
        self.storage.set(&self.storage_key, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    /// The scheme to apply. Only `System` reads the environment.
    pub fn resolved(&self) -> ResolvedTheme {
        match self.theme {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if self.preference.prefers_dark() => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }

    /// Root class known before the page reaches the browser.
    ///
    /// `None` for `System`: the environment preference is only known
    /// client-side, where `site.js` resolves it.
    pub fn prerender_root_class(&self) -> Option<&'static str> {
        match self.theme {
            Theme::System => None,
            _ => Some(self.resolved().root_class()),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
