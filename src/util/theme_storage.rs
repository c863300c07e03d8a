//! `localStorage` implementation of [`ThemeStore`].
//!
//! The preference is a plain `"light"` / `"dark"` string under a configurable
//! key (default `theme`). [`apply`] writes the chosen theme to the `<html>`
//! element's `data-theme` attribute, which the stylesheet keys off.
//!
//! A blocked or absent `localStorage` reads as "no preference" and drops
//! writes with a log line; the page simply stays light.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use enhance::theme::{Theme, ThemeStore};

/// `localStorage`-backed [`ThemeStore`] under a fixed key.
#[derive(Clone, Debug)]
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                log::debug!("localStorage unavailable; theme not persisted");
                return;
            };
            if storage.set_item(&self.key, theme.as_str()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// Apply `theme` as the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if el
                .set_attribute(enhance::theme::THEME_ATTRIBUTE, theme.as_str())
                .is_err()
            {
                log::warn!("failed to apply theme {theme}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
