//! Copy-to-clipboard button for one code block.

use enhance::copy::{self, CopyFeedback};
use leptos::prelude::*;

use crate::util::timer::TimeoutHandle;

/// Button copying `text` and showing the outcome for `feedback_ms`.
///
/// The pending revert lives in local storage; a second click replaces it, so
/// only the latest outcome reverts.
#[component]
pub fn CopyButton(text: String, feedback_ms: u32) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::Idle);
    let revert = StoredValue::new_local(None::<TimeoutHandle>);
    let text = StoredValue::new(text);

    let on_click = move |_| {
        #[cfg(feature = "csr")]
        {
            use crate::util::clipboard::BrowserClipboard;
            use crate::util::timer::BrowserTimer;

            let text = text.get_value();
            leptos::task::spawn_local(async move {
                let handle = copy::copy_with_feedback(
                    &BrowserClipboard,
                    &BrowserTimer,
                    &text,
                    feedback_ms,
                    move |state| feedback.set(state),
                )
                .await;
                revert.set_value(Some(handle));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (text, revert, feedback_ms);
        }
    };

    view! {
        <button
            class={copy::BUTTON_CLASS}
            class:copied=move || feedback.get().is_copied()
            aria-label={copy::BUTTON_ARIA_LABEL}
            on:click=on_click
        >
            {move || feedback.get().label()}
        </button>
    }
}
