//! Enhancer configuration: DOM selectors, timings, and limits.
//!
//! Every section is `#[serde(default)]`, so a partial JSON or TOML document
//! overrides only the keys it names.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("selector `{0}` cannot be empty")]
    EmptySelector(&'static str),
    #[error("invalid debounce delay: {0}ms (must be between 1 and 60000)")]
    InvalidDebounce(u32),
    #[error("invalid minimum query length: {0} (must be at least 1)")]
    InvalidMinQuery(usize),
    #[error("invalid result limit: {0} (must be between 1 and 100)")]
    InvalidMaxResults(usize),
    #[error("invalid snippet length: {0} (must be between 1 and 10000)")]
    InvalidSnippetChars(usize),
    #[error("invalid feedback duration: {0}ms (must be between 1 and 60000)")]
    InvalidFeedback(u32),
    #[error("invalid minimum heading count: {0} (must be at least 1)")]
    InvalidMinHeadings(usize),
    #[error("theme storage key cannot be empty")]
    EmptyStorageKey,
}

/// Complete configuration for one page enhancement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub selectors: Selectors,
    pub search: SearchConfig,
    pub copy: CopyConfig,
    pub toc: TocConfig,
    pub theme: ThemeConfig,
}

/// CSS selectors for the markup the enhancer attaches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub mobile_menu_toggle: String,
    pub main_nav: String,
    pub content_body: String,
    pub sidebar: String,
    pub header_content: String,
    pub code_blocks: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            mobile_menu_toggle: ".mobile-menu-toggle".to_owned(),
            main_nav: ".main-nav".to_owned(),
            content_body: ".content-body".to_owned(),
            sidebar: ".sidebar".to_owned(),
            header_content: ".header-content".to_owned(),
            code_blocks: "pre code".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet interval after the last keystroke before a search runs.
    pub debounce_ms: u32,
    /// Queries shorter than this (in characters) hide the results panel.
    pub min_query_chars: usize,
    pub max_results: usize,
    pub snippet_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_chars: 2,
            max_results: 5,
            snippet_chars: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How long the "Copied!" / "Failed" label stays before reverting.
    pub feedback_ms: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self { feedback_ms: 2000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Keep a heading's existing `id` instead of overwriting it with
    /// `heading-N`. Off by default.
    pub preserve_existing_ids: bool,
    pub min_headings: usize,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            preserve_existing_ids: false,
            min_headings: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
        }
    }
}

impl EnhancerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selectors.validate()?;
        self.search.validate()?;

        if !(1..=60_000).contains(&self.copy.feedback_ms) {
            return Err(ConfigError::InvalidFeedback(self.copy.feedback_ms));
        }
        if self.toc.min_headings == 0 {
            return Err(ConfigError::InvalidMinHeadings(self.toc.min_headings));
        }
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }

        Ok(())
    }
}

impl Selectors {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("mobile_menu_toggle", &self.mobile_menu_toggle),
            ("main_nav", &self.main_nav),
            ("content_body", &self.content_body),
            ("sidebar", &self.sidebar),
            ("header_content", &self.header_content),
            ("code_blocks", &self.code_blocks),
        ];
        match named.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptySelector(*name)),
            None => Ok(()),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=60_000).contains(&self.debounce_ms) {
            return Err(ConfigError::InvalidDebounce(self.debounce_ms));
        }
        if self.min_query_chars == 0 {
            return Err(ConfigError::InvalidMinQuery(self.min_query_chars));
        }
        if !(1..=100).contains(&self.max_results) {
            return Err(ConfigError::InvalidMaxResults(self.max_results));
        }
        if !(1..=10_000).contains(&self.snippet_chars) {
            return Err(ConfigError::InvalidSnippetChars(self.snippet_chars));
        }
        Ok(())
    }
}
