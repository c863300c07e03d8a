use super::*;
use crate::{copy, nav, search, toc};

#[test]
fn stylesheet_covers_every_injected_class() {
    let classes = [
        copy::WRAPPER_CLASS,
        copy::BUTTON_CLASS,
        copy::COPIED_CLASS,
        toc::CONTAINER_CLASS,
        "toc-h2",
        "toc-h3",
        "toc-h4",
        search::CONTAINER_CLASS,
        search::INPUT_CLASS,
        search::RESULTS_CLASS,
        search::RESULT_CLASS,
        "theme-toggle",
        nav::OPEN_CLASS,
    ];
    for class in classes {
        assert!(STYLESHEET.contains(&format!(".{class}")), "missing .{class}");
    }
}

#[test]
fn navigation_collapses_on_narrow_screens() {
    assert!(STYLESHEET.contains("@media (max-width: 768px)"));
    assert!(STYLESHEET.contains(".main-nav"));
}
