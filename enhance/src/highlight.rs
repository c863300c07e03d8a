//! Heuristic language tagging for unclassified code blocks.
//!
//! A block is tagged when its raw text contains one of a few substrings
//! typical of the language. There is no tokenizing, so a marker inside a
//! string literal of another language still counts.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Class prefix that marks a code block as already classified.
pub const LANGUAGE_CLASS_PREFIX: &str = "language-";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    OCaml,
}

impl Language {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::OCaml => "language-ocaml",
        }
    }

    fn markers(self) -> &'static [&'static str] {
        match self {
            Self::OCaml => &["open ", "let ", "match ", "type "],
        }
    }
}

#[must_use]
pub fn detect_language(text: &str) -> Option<Language> {
    [Language::OCaml]
        .into_iter()
        .find(|language| language.markers().iter().any(|marker| text.contains(marker)))
}

/// Whether any of `classes` already names a language.
pub fn is_classified<'a>(classes: impl IntoIterator<Item = &'a str>) -> bool {
    classes
        .into_iter()
        .any(|class| class.starts_with(LANGUAGE_CLASS_PREFIX))
}

/// Language to tag a block with, given its current classes and text.
pub fn classify<'a>(classes: impl IntoIterator<Item = &'a str>, text: &str) -> Option<Language> {
    if is_classified(classes) {
        return None;
    }
    detect_language(text)
}
