//! Inline page configuration.
//!
//! A page may carry `<script type="application/json" id="docs-enhancer-config">`
//! with a partial [`EnhancerConfig`]. Anything unreadable or invalid falls
//! back to the defaults so a typo never disables the page enhancements.

#[cfg(test)]
#[path = "inline_config_test.rs"]
mod inline_config_test;

use enhance::EnhancerConfig;

pub const CONFIG_ELEMENT_ID: &str = "docs-enhancer-config";

/// Parse and validate an inline JSON document.
pub fn parse(raw: &str) -> EnhancerConfig {
    let raw = raw.trim();
    if raw.is_empty() {
        return EnhancerConfig::default();
    }
    let config = match serde_json::from_str::<EnhancerConfig>(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring inline config: {err}");
            return EnhancerConfig::default();
        }
    };
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::warn!("ignoring inline config: {err}");
            EnhancerConfig::default()
        }
    }
}

/// Read the inline configuration element, if the page has one.
pub fn read() -> EnhancerConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => parse(&raw),
            None => EnhancerConfig::default(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        EnhancerConfig::default()
    }
}
