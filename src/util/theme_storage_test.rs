#![cfg(not(feature = "csr"))]

use enhance::theme;

use super::*;

#[test]
fn load_is_empty_without_browser_storage() {
    let store = LocalThemeStore::new("theme");
    assert_eq!(store.load(), None);
    assert_eq!(theme::restore(&store), None);
}

#[test]
fn toggle_still_flips_without_browser_storage() {
    let store = LocalThemeStore::new("theme");
    assert_eq!(theme::toggle(Theme::Light, &store), Theme::Dark);
    assert_eq!(theme::toggle(Theme::Dark, &store), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn key_is_kept() {
    assert_eq!(LocalThemeStore::new("docs-theme").key(), "docs-theme");
}
