//! Async Clipboard API adapter.
//!
//! `navigator.clipboard` is missing outside secure contexts, so its presence
//! is checked before the `web_sys::Clipboard` handle is used.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use enhance::copy::{Clipboard, ClipboardError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

#[cfg(feature = "csr")]
fn navigator_clipboard() -> Option<web_sys::Clipboard> {
    use wasm_bindgen::JsCast;

    let navigator = web_sys::window()?.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into()).ok()?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return None;
    }
    Some(clipboard.unchecked_into::<web_sys::Clipboard>())
}

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "csr")]
        {
            let clipboard = navigator_clipboard().ok_or(ClipboardError::Unavailable)?;
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no clipboard; dropping {} byte(s)", text.len());
            Err(ClipboardError::Unavailable)
        }
    }
}
