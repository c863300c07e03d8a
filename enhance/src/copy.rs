//! Copy-to-clipboard affordance for code blocks.
//!
//! A click writes the block's text through a [`Clipboard`], shows the outcome
//! on the button, and schedules the revert to the idle label. The clipboard
//! write is the only awaited operation on the page; a rejection is logged and
//! shown, never retried.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use thiserror::Error;

use crate::schedule::Timer;

/// Class carried by a button while it shows a successful copy.
pub const COPIED_CLASS: &str = "copied";
pub const BUTTON_CLASS: &str = "copy-button";
pub const WRAPPER_CLASS: &str = "code-block-wrapper";
pub const BUTTON_ARIA_LABEL: &str = "Copy code to clipboard";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Plain-text clipboard sink.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// What a copy button currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

impl CopyFeedback {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Copy",
            Self::Copied => "Copied!",
            Self::Failed => "Failed",
        }
    }

    /// Whether the success styling applies.
    #[must_use]
    pub fn is_copied(self) -> bool {
        self == Self::Copied
    }
}

/// Write `text` and translate the result into button feedback.
pub async fn copy_text(clipboard: &impl Clipboard, text: &str) -> CopyFeedback {
    match clipboard.write_text(text).await {
        Ok(()) => CopyFeedback::Copied,
        Err(err) => {
            log::error!("Failed to copy text: {err}");
            CopyFeedback::Failed
        }
    }
}

/// Full click flow: copy, show the outcome through `show`, and schedule the
/// revert to [`CopyFeedback::Idle`] after `feedback_ms`.
///
/// The returned handle owns the revert; keep it alive until it fires.
pub async fn copy_with_feedback<C, T, F>(
    clipboard: &C,
    timer: &T,
    text: &str,
    feedback_ms: u32,
    show: F,
) -> T::Handle
where
    C: Clipboard,
    T: Timer,
    F: Fn(CopyFeedback) + 'static,
{
    let outcome = copy_text(clipboard, text).await;
    show(outcome);
    timer.schedule(feedback_ms, Box::new(move || show(CopyFeedback::Idle)))
}
