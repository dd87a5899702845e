//! Light/dark mode toggle with a persisted preference.
//!
//! The preference is one flag in a [`KeyValueStore`]: exactly `"true"` means
//! dark, anything else (including a missing key) means light. Persistence is
//! best-effort: a failed read falls back to light and a failed write is
//! logged without undoing the visual switch.

use crate::consts::{DARK_MODE_CLASS, LIGHT_MODE_CLASS, TOGGLE_TO_DARK_LABEL, TOGGLE_TO_LIGHT_LABEL};
use crate::storage::KeyValueStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Decode the stored flag.
    pub fn from_flag(flag: Option<&str>) -> Self {
        if flag == Some("true") { Self::Dark } else { Self::Light }
    }

    /// Encode for storage.
    pub fn as_flag(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Body class for this mode.
    pub fn class(self) -> &'static str {
        match self {
            Self::Dark => DARK_MODE_CLASS,
            Self::Light => LIGHT_MODE_CLASS,
        }
    }

    /// Label for the toggle button while this mode is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => TOGGLE_TO_LIGHT_LABEL,
            Self::Light => TOGGLE_TO_DARK_LABEL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Current mode plus the storage key it persists under.
#[derive(Clone, Debug)]
pub struct ThemeToggle {
    key: String,
    current: Theme,
}

impl ThemeToggle {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), current: Theme::Light }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Read the stored preference and adopt it.
    pub fn load(&mut self, store: &impl KeyValueStore) -> Theme {
        self.current = match store.get(&self.key) {
            Ok(flag) => Theme::from_flag(flag.as_deref()),
            Err(err) => {
                log::warn!("theme preference unreadable, using light mode: {err}");
                Theme::Light
            }
        };
        self.current
    }

    /// Flip the mode and persist the new preference.
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = store.set(&self.key, self.current.as_flag()) {
            log::warn!("theme preference not saved: {err}");
        }
        log::info!("Theme switched to: {}", self.current.name());
        self.current
    }
}
