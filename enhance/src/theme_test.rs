use super::*;

#[test]
fn anything_but_dark_reads_as_light() {
    assert_eq!(Theme::from_attribute(None), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
}

#[test]
fn toggle_from_non_dark_goes_dark_then_light() {
    for raw in [None, Some("light"), Some("sepia"), Some("")] {
        let start = Theme::from_attribute(raw);
        let once = start.toggled();
        assert_eq!(once, Theme::Dark);
        assert_eq!(once.toggled(), Theme::Light);
    }
}

#[test]
fn double_toggle_returns_to_origin() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn icon_follows_theme() {
    assert_eq!(Theme::Light.icon(), "🌙");
    assert_eq!(Theme::Dark.icon(), "☀️");
}

#[test]
fn display_matches_stored_values() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Storage
// =============================================================

#[test]
fn restore_without_stored_value_is_none() {
    let store = MemoryThemeStore::default();
    assert_eq!(restore(&store), None);
}

#[test]
fn restore_maps_stored_value() {
    assert_eq!(restore(&MemoryThemeStore::with_value("dark")), Some(Theme::Dark));
    assert_eq!(restore(&MemoryThemeStore::with_value("light")), Some(Theme::Light));
    assert_eq!(restore(&MemoryThemeStore::with_value("neon")), Some(Theme::Light));
}

#[test]
fn toggle_persists_every_switch() {
    let store = MemoryThemeStore::default();

    let next = toggle(Theme::Light, &store);
    assert_eq!(next, Theme::Dark);
    assert_eq!(store.load().as_deref(), Some("dark"));

    let next = toggle(next, &store);
    assert_eq!(next, Theme::Light);
    assert_eq!(store.load().as_deref(), Some("light"));
}
