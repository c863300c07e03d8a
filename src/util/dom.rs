//! Thin `web-sys` helpers shared by the page wiring.
//!
//! Every lookup returns `Option`/empty collections instead of erroring; a
//! missing element means the feature that needs it is skipped.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, if any.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

/// All descendants of `root` matching `selector` in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .ok()
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Create a detached `<tag class="...">` element.
pub fn create(tag: &str, class: &str) -> Option<HtmlElement> {
    let el = document()?.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<HtmlElement>().ok()
}

/// Insert `child` as the first child of `parent`.
pub fn prepend(parent: &Element, child: &Element) -> bool {
    parent
        .insert_before(child, parent.first_child().as_ref())
        .is_ok()
}

/// Attach a listener that lives as long as the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::debug!("failed to attach {event} listener");
    }
    closure.forget();
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if el.class_list().toggle_with_force(class, on).is_err() {
        log::debug!("failed to set class {class}");
    }
}
