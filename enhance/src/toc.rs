//! Table-of-contents generation from second- to fourth-level headings.

#[cfg(test)]
#[path = "toc_test.rs"]
mod toc_test;

use crate::config::TocConfig;

/// Headings the table of contents is built from, in document order.
pub const HEADING_SELECTOR: &str = "h2, h3, h4";
pub const CONTAINER_CLASS: &str = "table-of-contents";
pub const LINK_CLASS: &str = "toc-link";
pub const TITLE: &str = "Table of Contents";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Level for a tag name such as `"h3"` or `"H3"`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            _ => None,
        }
    }

    #[must_use]
    pub fn depth(self) -> u8 {
        match self {
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
        }
    }

    /// Class on the entry's list item; indentation and weight key off it.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::H2 => "toc-h2",
            Self::H3 => "toc-h3",
            Self::H4 => "toc-h4",
        }
    }
}

/// A heading as found in the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    /// The heading's current `id`, if it has a non-empty one.
    pub id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub level: HeadingLevel,
    pub text: String,
    /// Id the heading must carry so the entry's link lands on it.
    pub anchor_id: String,
}

impl TocEntry {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

#[must_use]
pub fn anchor_id(index: usize) -> String {
    format!("heading-{index}")
}

/// Build the table of contents, or `None` when there are fewer headings
/// than `config.min_headings`.
///
/// Entries keep document order. Each heading gets `heading-{index}` unless
/// `config.preserve_existing_ids` is set and it already has an id.
#[must_use]
pub fn build(headings: &[Heading], config: &TocConfig) -> Option<TableOfContents> {
    if headings.len() < config.min_headings {
        log::debug!(
            "skipping table of contents: {} heading(s), need {}",
            headings.len(),
            config.min_headings
        );
        return None;
    }

    let entries = headings
        .iter()
        .enumerate()
        .map(|(index, heading)| {
            let anchor_id = match &heading.id {
                Some(id) if config.preserve_existing_ids && !id.is_empty() => id.clone(),
                _ => anchor_id(index),
            };
            TocEntry {
                level: heading.level,
                text: heading.text.clone(),
                anchor_id,
            }
        })
        .collect();

    Some(TableOfContents { entries })
}
