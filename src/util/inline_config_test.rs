use super::*;

#[test]
fn empty_document_uses_defaults() {
    assert_eq!(parse(""), EnhancerConfig::default());
    assert_eq!(parse("   \n"), EnhancerConfig::default());
}

#[test]
fn partial_document_overrides_named_keys_only() {
    let config = parse(r#"{"search": {"debounce_ms": 150}, "theme": {"storage_key": "docs-theme"}}"#);
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.search.max_results, 5);
    assert_eq!(config.theme.storage_key, "docs-theme");
    assert_eq!(config.selectors.content_body, ".content-body");
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(parse("{not json"), EnhancerConfig::default());
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    assert_eq!(
        parse(r#"{"search": {"max_results": 0}}"#),
        EnhancerConfig::default()
    );
    assert_eq!(
        parse(r#"{"selectors": {"sidebar": ""}}"#),
        EnhancerConfig::default()
    );
}

#[test]
fn read_without_browser_uses_defaults() {
    assert_eq!(read(), EnhancerConfig::default());
}
