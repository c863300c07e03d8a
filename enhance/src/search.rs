//! Naive in-page search over rendered text.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no index. Every execution walks the headings, paragraphs, list
//! items and inline code of the content region in document order and keeps
//! the first few elements whose text contains the query, ignoring case.
//! Results are not ranked.
//!
//! TRADE-OFFS
//! ==========
//! Snippets are the prefix of the element's text, not a window around the
//! match, so a hit deep inside a long paragraph may not be visible in its
//! snippet. Highlighting escapes the query, so regex metacharacters match
//! literally.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use regex::RegexBuilder;

use crate::config::SearchConfig;

/// Elements scanned on every search, in document order.
pub const SEARCHABLE_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, code";
/// Elements that can title a result.
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
pub const SNIPPET_SUFFIX: &str = "...";
pub const NO_RESULTS: &str = "No results found";
pub const PLACEHOLDER: &str = "Search documentation...";
pub const CONTAINER_CLASS: &str = "search-container";
pub const INPUT_CLASS: &str = "search-input";
pub const RESULTS_CLASS: &str = "search-results";
pub const RESULT_CLASS: &str = "search-result";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Heading(u8),
    Paragraph,
    ListItem,
    Code,
}

impl NodeKind {
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => Some(Self::Heading(1)),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "p" => Some(Self::Paragraph),
            "li" => Some(Self::ListItem),
            "code" => Some(Self::Code),
            _ => None,
        }
    }
}

/// One searchable element of the content region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub kind: NodeKind,
    /// Rendered text content.
    pub text: String,
    /// Text of the nearest heading among the element and its ancestors.
    pub enclosing_heading: Option<String>,
    pub id: Option<String>,
}

impl SearchNode {
    #[must_use]
    pub fn title(&self) -> &str {
        match (&self.kind, &self.enclosing_heading) {
            (NodeKind::Heading(_), _) | (_, None) => &self.text,
            (_, Some(heading)) => heading,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    /// Id of the matching element; empty when it has none.
    pub target_id: String,
}

impl SearchResult {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }
}

/// What the results panel shows after a search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; panel hidden.
    #[default]
    Hidden,
    /// Nothing matched; panel shows [`NO_RESULTS`].
    Empty,
    Results {
        query: String,
        results: Vec<SearchResult>,
    },
}

impl SearchOutcome {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// A run of text, marked when it matches the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub marked: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            marked: false,
        }
    }
}

#[must_use]
pub fn is_searchable(query: &str, config: &SearchConfig) -> bool {
    query.chars().count() >= config.min_query_chars
}

/// Execute a search, collecting nodes only when the query is long enough.
///
/// Returns `None` when `collect` finds no content region, in which case the
/// panel is left as it is.
pub fn execute<F>(query: &str, config: &SearchConfig, collect: F) -> Option<SearchOutcome>
where
    F: FnOnce() -> Option<Vec<SearchNode>>,
{
    if !is_searchable(query, config) {
        return Some(SearchOutcome::Hidden);
    }
    let nodes = collect()?;
    Some(run(query, &nodes, config))
}

/// Search `nodes` for `query`.
#[must_use]
pub fn run(query: &str, nodes: &[SearchNode], config: &SearchConfig) -> SearchOutcome {
    if !is_searchable(query, config) {
        return SearchOutcome::Hidden;
    }

    let results = find_matches(query, nodes, config);
    log::debug!("search {query:?}: {} result(s) shown", results.len());

    if results.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Results {
            query: query.to_owned(),
            results,
        }
    }
}

/// First `config.max_results` matching nodes in document order.
#[must_use]
pub fn find_matches(query: &str, nodes: &[SearchNode], config: &SearchConfig) -> Vec<SearchResult> {
    let needle = query.to_lowercase();
    nodes
        .iter()
        .filter(|node| node.text.to_lowercase().contains(&needle))
        .take(config.max_results)
        .map(|node| SearchResult {
            title: node.title().to_owned(),
            snippet: snippet(&node.text, config.snippet_chars),
            target_id: node.id.clone().unwrap_or_default(),
        })
        .collect()
}

/// The first `max_chars` characters of `text` followed by [`SNIPPET_SUFFIX`].
/// The suffix is appended even when nothing was cut.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str(SNIPPET_SUFFIX);
    out
}

/// Split `text` into segments, marking every case-insensitive occurrence of
/// `query`.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let matcher = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(matcher) => matcher,
        Err(err) => {
            log::warn!("cannot highlight {query:?}: {err}");
            return vec![Segment::plain(text)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in matcher.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment {
            text: found.as_str().to_owned(),
            marked: true,
        });
        last = found.end();
    }
    if last < text.len() {
        segments.push(Segment::plain(&text[last..]));
    }
    segments
}
