use super::*;

#[test]
fn ocaml_markers_are_detected() {
    let text = r#"let x = 1 in match x with | 1 -> "a" | _ -> "b""#;
    assert_eq!(detect_language(text), Some(Language::OCaml));
    assert_eq!(detect_language("open Core"), Some(Language::OCaml));
    assert_eq!(detect_language("type move = string"), Some(Language::OCaml));
}

#[test]
fn other_code_is_left_alone() {
    assert_eq!(detect_language("console.log(1)"), None);
    assert_eq!(detect_language("letter"), None);
    assert_eq!(detect_language(""), None);
}

#[test]
fn markers_need_trailing_space() {
    assert_eq!(detect_language("let\nx"), None);
    assert_eq!(detect_language("matches"), None);
}

#[test]
fn false_positives_inside_strings_are_accepted() {
    assert_eq!(
        detect_language(r#"console.log("let me in")"#),
        Some(Language::OCaml)
    );
}

#[test]
fn classified_blocks_are_skipped() {
    assert_eq!(classify(["language-rust"], "let x = 1;"), None);
    assert_eq!(classify(["hljs", "language-js"], "let y = 2"), None);
}

#[test]
fn unclassified_blocks_are_tagged() {
    assert_eq!(classify(std::iter::empty(), "let x = 1"), Some(Language::OCaml));
    assert_eq!(classify(["hljs"], "match x with"), Some(Language::OCaml));
    assert_eq!(Language::OCaml.class(), "language-ocaml");
}

#[test]
fn page_of_blocks_tags_only_unclassified_ocaml() {
    let blocks = [
        ("", "open Pgn\nlet game = parse text"),
        ("hljs", "match result with\n| Ok g -> g"),
        ("language-sh", "let opam = \"install\""),
        ("", "$ make test"),
    ];
    let tags: Vec<Option<&str>> = blocks
        .iter()
        .map(|(classes, text)| classify(classes.split_whitespace(), text).map(Language::class))
        .collect();
    assert_eq!(
        tags,
        [Some("language-ocaml"), Some("language-ocaml"), None, None]
    );
}
