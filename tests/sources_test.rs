use greenai_collector::sources::{default_sources, is_valid_feed_url};

#[test]
fn registry_urls_are_well_formed() {
    let sources = default_sources();
    assert!(!sources.is_empty());

    for source in &sources {
        assert!(is_valid_feed_url(&source.url), "bad url: {}", source.url);
        assert!(!source.name.is_empty());
    }
}

#[test]
fn only_sustainability_sources_bypass_filtering() {
    let bypassing: Vec<String> = default_sources()
        .into_iter()
        .filter(|s| s.always_include)
        .map(|s| s.name)
        .collect();

    assert_eq!(bypassing, vec!["Google Sustainability"]);
}

#[test]
fn rejects_non_http_urls() {
    assert!(!is_valid_feed_url("ftp://example.com/feed"));
    assert!(!is_valid_feed_url("not a url"));
    assert!(is_valid_feed_url("https://example.com/rss.xml"));
}
