//! Light/dark theme toggle button.
//!
//! DESIGN
//! ======
//! The current theme is component state seeded by the caller from the stored
//! preference; the `data-theme` attribute and `localStorage` follow it.

use enhance::theme::{self, Theme};
use leptos::prelude::*;

use crate::util::theme_storage::{self, LocalThemeStore};

pub const BUTTON_CLASS: &str = "theme-toggle";
pub const BUTTON_ARIA_LABEL: &str = "Toggle dark mode";

#[component]
pub fn ThemeToggle(initial: Theme, storage_key: String) -> impl IntoView {
    let current = RwSignal::new(initial);
    let store = StoredValue::new(LocalThemeStore::new(storage_key));

    let on_click = move |_| {
        let next = store.with_value(|store| theme::toggle(current.get_untracked(), store));
        theme_storage::apply(next);
        current.set(next);
    };

    view! {
        <button class=BUTTON_CLASS aria-label=BUTTON_ARIA_LABEL on:click=on_click>
            {move || current.get().icon()}
        </button>
    }
}
