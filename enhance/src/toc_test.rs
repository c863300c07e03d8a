use super::*;

fn heading(level: HeadingLevel, text: &str) -> Heading {
    Heading {
        level,
        text: text.to_owned(),
        id: None,
    }
}

#[test]
fn no_headings_produce_nothing() {
    assert_eq!(build(&[], &TocConfig::default()), None);
}

#[test]
fn single_heading_produces_nothing() {
    let headings = [heading(HeadingLevel::H2, "Only")];
    assert_eq!(build(&headings, &TocConfig::default()), None);
}

#[test]
fn two_or_more_headings_keep_count_and_order() {
    let headings = [
        heading(HeadingLevel::H2, "Install"),
        heading(HeadingLevel::H3, "From source"),
        heading(HeadingLevel::H4, "Dependencies"),
        heading(HeadingLevel::H2, "Usage"),
    ];
    let toc = build(&headings, &TocConfig::default()).expect("toc should be built");

    assert_eq!(toc.entries.len(), headings.len());
    let texts: Vec<&str> = toc.entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["Install", "From source", "Dependencies", "Usage"]);
    let levels: Vec<HeadingLevel> = toc.entries.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![HeadingLevel::H2, HeadingLevel::H3, HeadingLevel::H4, HeadingLevel::H2]
    );
}

#[test]
fn anchor_ids_are_sequential_and_overwrite_existing() {
    let mut headings = vec![heading(HeadingLevel::H2, "A"), heading(HeadingLevel::H2, "B")];
    headings[1].id = Some("custom".to_owned());
    let toc = build(&headings, &TocConfig::default()).expect("toc should be built");

    assert_eq!(toc.entries[0].anchor_id, "heading-0");
    assert_eq!(toc.entries[1].anchor_id, "heading-1");
    assert_eq!(toc.entries[1].href(), "#heading-1");
}

#[test]
fn existing_ids_survive_when_preserved() {
    let mut headings = vec![
        heading(HeadingLevel::H2, "A"),
        heading(HeadingLevel::H3, "B"),
        heading(HeadingLevel::H3, "C"),
    ];
    headings[1].id = Some("deep-link".to_owned());
    headings[2].id = Some(String::new());
    let config = TocConfig {
        preserve_existing_ids: true,
        ..TocConfig::default()
    };
    let toc = build(&headings, &config).expect("toc should be built");

    assert_eq!(toc.entries[0].anchor_id, "heading-0");
    assert_eq!(toc.entries[1].anchor_id, "deep-link");
    assert_eq!(toc.entries[2].anchor_id, "heading-2");
}

#[test]
fn min_headings_is_configurable() {
    let headings = [heading(HeadingLevel::H2, "Only")];
    let config = TocConfig {
        min_headings: 1,
        ..TocConfig::default()
    };
    assert!(build(&headings, &config).is_some());
}

#[test]
fn heading_level_parsing_and_classes() {
    assert_eq!(HeadingLevel::from_tag("h2"), Some(HeadingLevel::H2));
    assert_eq!(HeadingLevel::from_tag("H3"), Some(HeadingLevel::H3));
    assert_eq!(HeadingLevel::from_tag("h4"), Some(HeadingLevel::H4));
    assert_eq!(HeadingLevel::from_tag("h1"), None);
    assert_eq!(HeadingLevel::from_tag("p"), None);

    assert_eq!(HeadingLevel::H2.css_class(), "toc-h2");
    assert_eq!(HeadingLevel::H4.css_class(), "toc-h4");
    assert_eq!(HeadingLevel::H3.depth(), 3);
}
