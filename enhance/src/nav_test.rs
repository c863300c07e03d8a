use super::*;

#[test]
fn closed_menu_opens() {
    let menu = MenuState::from_class_present(false);
    assert!(menu.toggled().open);
}

#[test]
fn menu_shipped_open_closes_on_first_click() {
    let menu = MenuState::from_class_present(true);
    assert!(!menu.toggled().open);
}

#[test]
fn two_clicks_return_to_origin() {
    for present in [false, true] {
        let menu = MenuState::from_class_present(present);
        assert_eq!(menu.toggled().toggled(), menu);
    }
}

#[test]
fn fragment_target_strips_hash() {
    assert_eq!(fragment_target("#install"), Some("install"));
    assert_eq!(fragment_target("#heading-3"), Some("heading-3"));
}

#[test]
fn fragment_target_ignores_other_links() {
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/guide#install"), None);
    assert_eq!(fragment_target("https://example.com"), None);
    assert_eq!(fragment_target(""), None);
}
