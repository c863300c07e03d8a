//! Reads the rendered page into the core crate's plain data.
//!
//! Scanning happens at call time against the live DOM, so search always sees
//! the page as currently rendered.

#[cfg(test)]
#[path = "page_scan_test.rs"]
mod page_scan_test;

use enhance::search::{NodeKind, SearchNode};
use enhance::toc::{Heading, HeadingLevel};

/// Build a search node from an element's tag, text, enclosing heading and id.
pub fn search_node(
    tag: &str,
    text: String,
    enclosing_heading: Option<String>,
    id: Option<String>,
) -> Option<SearchNode> {
    Some(SearchNode {
        kind: NodeKind::from_tag(tag)?,
        text,
        enclosing_heading,
        id: id.filter(|id| !id.is_empty()),
    })
}

/// Build a TOC heading from an element's tag, text and id.
pub fn heading(tag: &str, text: String, id: Option<String>) -> Option<Heading> {
    Some(Heading {
        level: HeadingLevel::from_tag(tag)?,
        text,
        id: id.filter(|id| !id.is_empty()),
    })
}

/// Every searchable element under the content region, in document order.
///
/// `None` when the page has no content region.
pub fn collect_search_nodes(content_selector: &str) -> Option<Vec<SearchNode>> {
    #[cfg(feature = "csr")]
    {
        use enhance::search::{HEADING_SELECTOR, SEARCHABLE_SELECTOR};

        let region = super::dom::query(content_selector)?;
        let nodes = super::dom::query_all_in(&region, SEARCHABLE_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let enclosing = el
                    .closest(HEADING_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|h| h.text_content());
                search_node(
                    &el.tag_name(),
                    el.text_content().unwrap_or_default(),
                    enclosing,
                    Some(el.id()),
                )
            })
            .collect();
        Some(nodes)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("no document to scan for {content_selector}");
        None
    }
}

/// TOC headings under `region`, paired with their elements.
#[cfg(feature = "csr")]
pub fn collect_headings(region: &web_sys::Element) -> Vec<(web_sys::Element, Heading)> {
    super::dom::query_all_in(region, enhance::toc::HEADING_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let heading = heading(
                &el.tag_name(),
                el.text_content().unwrap_or_default(),
                Some(el.id()),
            )?;
            Some((el, heading))
        })
        .collect()
}
