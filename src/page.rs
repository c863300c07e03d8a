//! Wires every enhancement onto the rendered page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page load after the document is parsed. Each feature looks
//! up the markup it needs and skips itself when that markup is missing, so a
//! page without a sidebar still gets copy buttons, a TOC and so on.
//!
//! Order: stylesheet, navigation toggle, code block copy buttons, table of
//! contents, fragment links, search, theme toggle, language tagging.

use enhance::config::{Selectors, ThemeConfig};
use enhance::nav::{self, MenuState};
use enhance::theme::{self, Theme};
use enhance::toc::{self, Heading};
use enhance::{EnhancerConfig, copy, highlight, search, styles};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::components::copy_button::CopyButton;
use crate::components::search_panel::SearchPanel;
use crate::components::table_of_contents::TableOfContentsBlock;
use crate::components::theme_toggle::ThemeToggle;
use crate::util::dom;
use crate::util::page_scan;
use crate::util::theme_storage::{self, LocalThemeStore};

/// Enhance now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn run_when_ready(config: EnhancerConfig) {
    let Some(document) = dom::document() else {
        log::warn!("no document; page not enhanced");
        return;
    };

    let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
        .ok()
        .and_then(|state| state.as_string());
    if ready_state.as_deref() != Some("loading") {
        enhance(&config);
        return;
    }

    let callback = Closure::once_into_js(move || enhance(&config));
    if document
        .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        .is_err()
    {
        log::warn!("failed to wait for DOMContentLoaded");
    }
}

/// Apply every enhancement to the current document.
pub fn enhance(config: &EnhancerConfig) {
    inject_styles();
    wire_navigation(&config.selectors);
    wire_code_blocks(config);
    build_table_of_contents(config);
    wire_fragment_links();
    mount_search(config);
    mount_theme_toggle(&config.theme, &config.selectors);
    tag_languages(&config.selectors);
    log::info!("docs page enhanced");
}

fn inject_styles() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.get_element_by_id(styles::STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        log::debug!("no <head>; styles not injected");
        return;
    };
    style.set_id(styles::STYLE_ELEMENT_ID);
    style.set_text_content(Some(styles::STYLESHEET));
    if head.append_child(&style).is_err() {
        log::debug!("failed to append stylesheet");
    }
}

fn wire_navigation(selectors: &Selectors) {
    let (Some(toggle), Some(menu)) = (
        dom::query(&selectors.mobile_menu_toggle),
        dom::query(&selectors.main_nav),
    ) else {
        log::debug!("navigation toggle or menu missing; skipping");
        return;
    };

    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let present = menu.class_list().contains(nav::OPEN_CLASS);
        let next = MenuState::from_class_present(present).toggled();
        dom::set_class(&menu, nav::OPEN_CLASS, next.open);
        dom::set_class(&button, nav::OPEN_CLASS, next.open);
    });
}

fn wire_code_blocks(config: &EnhancerConfig) {
    let feedback_ms = config.copy.feedback_ms;
    for code in dom::query_all(&config.selectors.code_blocks) {
        let Some(pre) = code.parent_element() else {
            continue;
        };
        let (Some(parent), Some(wrapper)) =
            (pre.parent_node(), dom::create("div", copy::WRAPPER_CLASS))
        else {
            continue;
        };
        if parent.insert_before(&wrapper, Some(pre.as_ref())).is_err()
            || wrapper.append_child(&pre).is_err()
        {
            log::debug!("failed to wrap code block");
            continue;
        }

        let text = code.text_content().unwrap_or_default();
        leptos::mount::mount_to(wrapper, move || {
            view! { <CopyButton text=text feedback_ms=feedback_ms /> }
        })
        .forget();
    }
}

fn build_table_of_contents(config: &EnhancerConfig) {
    let Some(region) = dom::query(&config.selectors.content_body) else {
        log::debug!("no content region; skipping table of contents");
        return;
    };

    let found = page_scan::collect_headings(&region);
    let headings: Vec<Heading> = found.iter().map(|(_, heading)| heading.clone()).collect();
    let Some(table) = toc::build(&headings, &config.toc) else {
        return;
    };

    for ((el, _), entry) in found.iter().zip(&table.entries) {
        el.set_id(&entry.anchor_id);
    }

    let Some(host) = dom::create("div", toc::CONTAINER_CLASS) else {
        return;
    };
    if !dom::prepend(&region, &host) {
        log::debug!("failed to insert table of contents");
        return;
    }
    leptos::mount::mount_to(host, move || view! { <TableOfContentsBlock table=table /> }).forget();
}

/// One delegated listener, so links created later (TOC entries) scroll too.
fn wire_fragment_links() {
    let Some(document) = dom::document() else {
        return;
    };
    let lookup = document.clone();
    dom::listen(&document, "click", move |event: Event| {
        let Some(link) = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(nav::FRAGMENT_LINK_SELECTOR).ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = nav::fragment_target(&href).and_then(|id| lookup.get_element_by_id(id))
        else {
            return;
        };

        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

fn mount_search(config: &EnhancerConfig) {
    let Some(sidebar) = dom::query(&config.selectors.sidebar) else {
        log::debug!("no sidebar; skipping search");
        return;
    };
    let Some(host) = dom::create("div", search::CONTAINER_CLASS) else {
        return;
    };
    if !dom::prepend(&sidebar, &host) {
        log::debug!("failed to insert search box");
        return;
    }

    let search_config = config.search.clone();
    let content_selector = config.selectors.content_body.clone();
    leptos::mount::mount_to(host, move || {
        view! { <SearchPanel config=search_config content_selector=content_selector /> }
    })
    .forget();
}

/// The stored theme is applied even when the page has no header to hold the
/// toggle.
fn mount_theme_toggle(config: &ThemeConfig, selectors: &Selectors) {
    let store = LocalThemeStore::new(config.storage_key.clone());
    let initial = match theme::restore(&store) {
        Some(stored) => {
            theme_storage::apply(stored);
            stored
        }
        None => Theme::default(),
    };

    let Some(header) = dom::query(&selectors.header_content)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("no header; theme toggle not mounted");
        return;
    };
    let storage_key = config.storage_key.clone();
    leptos::mount::mount_to(header, move || {
        view! { <ThemeToggle initial=initial storage_key=storage_key /> }
    })
    .forget();
}

fn tag_languages(selectors: &Selectors) {
    for code in dom::query_all(&selectors.code_blocks) {
        let classes = code.class_name();
        let text = code.text_content().unwrap_or_default();
        if let Some(language) = highlight::classify(classes.split_whitespace(), &text) {
            if code.class_list().add_1(language.class()).is_err() {
                log::debug!("failed to tag code block as {}", language.class());
            }
        }
    }
}
