//! Light/dark theme preference.
//!
//! The preference is a single key in durable key-value storage. A missing
//! value means "no explicit preference" and renders as light; any stored
//! value other than exactly `"dark"` is treated as light when toggling.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Document attribute carrying the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret an applied or stored attribute value.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle button: a sun offers the way back from dark, a
    /// moon the way into it.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable storage for the theme preference.
pub trait ThemeStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme);
}

/// In-memory store, used where no browser storage exists.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_owned())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, theme: Theme) {
        *self.value.borrow_mut() = Some(theme.as_str().to_owned());
    }
}

/// Theme to apply at startup. `None` when nothing is stored, in which case
/// the page keeps its default (light) presentation untouched.
pub fn restore(store: &impl ThemeStore) -> Option<Theme> {
    store
        .load()
        .map(|raw| Theme::from_attribute(Some(raw.as_str())))
}

/// Flip `current`, persist the result, and return it for the caller to apply.
pub fn toggle(current: Theme, store: &impl ThemeStore) -> Theme {
    let next = current.toggled();
    store.save(next);
    log::debug!("theme switched to {next}");
    next
}
