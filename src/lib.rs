//! # docs-enhancer
//!
//! Leptos + WASM enhancement layer for statically rendered documentation
//! pages. Loaded once per page, it wires the mobile navigation toggle,
//! smooth same-page scrolling, copy buttons on code blocks, a generated
//! table of contents, in-page search, a persisted light/dark toggle, and
//! OCaml language tagging onto markup that already exists.
//!
//! The behaviours themselves live in the `enhance` crate as plain state and
//! pure functions. This crate supplies the browser side: components mounted
//! into the page, and `util` adapters for timers, clipboard and storage.
//! Without the `csr` feature everything compiles natively and the adapters
//! no-op, which keeps unit tests on the host.

pub mod components;
#[cfg(feature = "csr")]
pub mod page;
pub mod util;

/// WASM entry point: read inline configuration and enhance the page once the
/// document is ready.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let config = util::inline_config::read();
    page::run_when_ready(config);
}
