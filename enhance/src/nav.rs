//! Mobile navigation toggle and same-page anchor resolution.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class mirrored onto both the navigation container and its toggle.
pub const OPEN_CLASS: &str = "active";

/// Selector for links that point inside the current page.
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

/// Open/closed state of the mobile navigation, read from the menu's class
/// list on every click. Nothing is kept between clicks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// State implied by whether the menu currently carries [`OPEN_CLASS`].
    #[must_use]
    pub fn from_class_present(present: bool) -> Self {
        Self { open: present }
    }

    /// State after one click.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Element id a same-page link points at. `None` for links that leave the
/// page and for a bare `#`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
