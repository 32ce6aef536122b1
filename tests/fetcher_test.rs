use greenai_collector::types::FeedSource;
use greenai_collector::Fetcher;

const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Channel</title>
    <link>https://news.example</link>
    <description>Sample</description>
    <item>
      <title>  First story  </title>
      <link>https://news.example/1</link>
      <description><![CDATA[<p>Machine learning &amp; health research</p>]]></description>
      <pubDate>Mon, 02 Jun 2025 08:00:00 GMT</pubDate>
    </item>
    <item>
      <title></title>
      <link>https://news.example/no-title</link>
    </item>
    <item>
      <title>No link at all</title>
    </item>
    <item>
      <title>Minimal</title>
      <link>https://news.example/2</link>
    </item>
  </channel>
</rss>"#;

const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Feed</title>
  <id>urn:test:feed</id>
  <updated>2025-06-02T00:00:00Z</updated>
  <entry>
    <title>Climate entry</title>
    <id>urn:test:e1</id>
    <link href="https://atom.example/e1"/>
    <updated>2025-06-01T12:00:00Z</updated>
    <author><name>Jane Doe</name></author>
    <author><name>Wei Chen</name></author>
    <content type="html">&lt;p&gt;Neural network for climate modeling&lt;/p&gt;</content>
  </entry>
</feed>"#;

fn source(name: &str) -> FeedSource {
    FeedSource::new("https://news.example/rss", name, false)
}

#[test]
fn entries_missing_title_or_link_are_dropped() {
    let articles = Fetcher::parse_feed(&source("Test"), RSS_SAMPLE.as_bytes(), 20).unwrap();

    let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["First story", "Minimal"]);
}

#[test]
fn rss_fields_are_normalized() {
    let articles = Fetcher::parse_feed(&source("Test Channel"), RSS_SAMPLE.as_bytes(), 20).unwrap();
    let first = &articles[0];

    assert_eq!(first.title, "First story");
    assert_eq!(first.url, "https://news.example/1");
    assert_eq!(first.source, "Test Channel");
    assert_eq!(first.content, "Machine learning & health research");
    assert_eq!(first.authors, "Unknown");
    assert!(first.published.is_some());

    // No date anywhere on the entry: leave it absent, never invent one.
    assert!(articles[1].published.is_none());
    assert_eq!(articles[1].content, "");
}

#[test]
fn max_items_takes_the_first_entries_in_feed_order() {
    let articles = Fetcher::parse_feed(&source("Test"), RSS_SAMPLE.as_bytes(), 1).unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].url, "https://news.example/1");
}

#[test]
fn atom_entries_fall_back_to_updated_date_and_join_authors() {
    let articles = Fetcher::parse_feed(&source("Atom"), ATOM_SAMPLE.as_bytes(), 20).unwrap();
    assert_eq!(articles.len(), 1);

    let entry = &articles[0];
    assert_eq!(entry.url, "https://atom.example/e1");
    assert_eq!(entry.authors, "Jane Doe, Wei Chen");
    assert_eq!(entry.content, "Neural network for climate modeling");
    assert_eq!(
        entry.published.unwrap().to_rfc3339(),
        "2025-06-01T12:00:00+00:00"
    );
}

#[test]
fn garbage_input_is_a_parse_error() {
    let result = Fetcher::parse_feed(&source("Broken"), b"this is not xml", 20);
    assert!(result.is_err());
}
