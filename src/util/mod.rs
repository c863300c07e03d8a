//! Browser adapters behind the core crate's traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from components so
//! the same components compile natively, where every adapter is a no-op.

pub mod clipboard;
#[cfg(feature = "csr")]
pub mod dom;
pub mod inline_config;
pub mod page_scan;
pub mod theme_storage;
pub mod timer;
