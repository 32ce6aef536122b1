use async_trait::async_trait;
use greenai_collector::types::{Article, CollectorError, FeedSource, Result};
use greenai_collector::FetchArticles;
use std::collections::HashMap;

/// Canned per-source fetch results keyed by feed URL. Sources without an
/// entry simulate a parse failure.
pub struct StubFetcher {
    results: HashMap<String, Vec<Article>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    pub fn with_feed(mut self, url: &str, articles: Vec<Article>) -> Self {
        self.results.insert(url.to_string(), articles);
        self
    }
}

#[async_trait]
impl FetchArticles for StubFetcher {
    async fn fetch_feed(&self, source: &FeedSource, max_items: usize) -> Result<Vec<Article>> {
        match self.results.get(&source.url) {
            Some(articles) => Ok(articles.iter().take(max_items).cloned().collect()),
            None => Err(CollectorError::Parse(format!(
                "{}: unparsable feed",
                source.name
            ))),
        }
    }
}

pub fn article(title: &str, url: &str, source: &str, content: &str) -> Article {
    Article {
        title: title.to_string(),
        url: url.to_string(),
        source: source.to_string(),
        published: None,
        content: content.to_string(),
        authors: "Unknown".to_string(),
    }
}
