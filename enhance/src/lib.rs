//! Page-enhancement behaviours for static documentation sites.
//!
//! This crate is platform agnostic: every behaviour is expressed as plain
//! state and pure functions, and the browser-facing effects (timers,
//! clipboard, storage) sit behind small traits, which the `docs-enhancer`
//! crate implements with `web-sys`.
//!
//! DESIGN
//! ======
//! The page enhancer never keeps hidden global state. Theme, menu, copy
//! feedback and search results are values the caller owns and re-renders.

pub mod config;
pub mod copy;
pub mod highlight;
pub mod nav;
pub mod schedule;
pub mod search;
pub mod styles;
pub mod theme;
pub mod toc;

pub use config::{ConfigError, EnhancerConfig};
