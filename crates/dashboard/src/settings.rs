//! Persisted UI preferences (theme, sidebar).
//!
//! Loaded once at startup and saved on every change. The view layer receives
//! a [`UiSettings`] value instead of reading global state.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: Theme,
    pub sidebar_expanded: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            sidebar_expanded: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings store unavailable")]
    Unavailable,
}

/// Where settings live between runs.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<UiSettings>, SettingsError>;
    fn save(&self, settings: &UiSettings) -> Result<(), SettingsError>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<Option<UiSettings>, SettingsError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn save(&self, settings: &UiSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_vec_pretty(settings)?;
        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    inner: RwLock<Option<UiSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: UiSettings) -> Self {
        Self {
            inner: RwLock::new(Some(settings)),
        }
    }

    /// Last saved value, if any.
    pub fn saved(&self) -> Option<UiSettings> {
        self.inner.read().ok().and_then(|s| *s)
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> Result<Option<UiSettings>, SettingsError> {
        let guard = self.inner.read().map_err(|_| SettingsError::Unavailable)?;
        Ok(*guard)
    }

    fn save(&self, settings: &UiSettings) -> Result<(), SettingsError> {
        let mut guard = self.inner.write().map_err(|_| SettingsError::Unavailable)?;
        *guard = Some(*settings);
        Ok(())
    }
}

/// Current settings plus the store they persist to.
#[derive(Debug)]
pub struct SettingsHandle<S: SettingsStore> {
    store: S,
    current: UiSettings,
}

impl<S: SettingsStore> SettingsHandle<S> {
    /// Load from `store`. A missing or unreadable record yields defaults; a
    /// broken settings file must not keep the dashboard from starting.
    pub fn load(store: S) -> Self {
        let current = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => UiSettings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load ui settings; using defaults");
                UiSettings::default()
            }
        };
        Self { store, current }
    }

    pub fn current(&self) -> UiSettings {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), SettingsError> {
        self.update(|s| s.theme = theme)
    }

    pub fn toggle_theme(&mut self) -> Result<(), SettingsError> {
        self.update(|s| s.theme = s.theme.toggled())
    }

    pub fn set_sidebar_expanded(&mut self, expanded: bool) -> Result<(), SettingsError> {
        self.update(|s| s.sidebar_expanded = expanded)
    }

    pub fn toggle_sidebar(&mut self) -> Result<(), SettingsError> {
        self.update(|s| s.sidebar_expanded = !s.sidebar_expanded)
    }

    /// Apply a change and persist it. Unchanged values are not written. On a
    /// failed save the in-memory value is kept and the error returned.
    fn update(&mut self, change: impl FnOnce(&mut UiSettings)) -> Result<(), SettingsError> {
        let mut next = self.current;
        change(&mut next);
        if next == self.current {
            return Ok(());
        }
        self.current = next;
        self.store.save(&next)?;
        tracing::debug!(theme = ?next.theme, sidebar_expanded = next.sidebar_expanded, "ui settings saved");
        Ok(())
    }
}
