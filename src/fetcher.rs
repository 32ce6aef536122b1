use crate::sanitize::strip_html;
use crate::types::{Article, CollectorError, FeedSource, Result};
use async_trait::async_trait;
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            // Several configured sources 403 generic or bot-like clients, so
            // a realistic browser identifier is required for correctness.
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/121.0.0.0 Safari/537.36"
                .to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Seam between the pipeline and the network. The provided `fetch_all`
/// isolates per-source failures: a broken feed logs and contributes zero
/// articles, it never aborts the run.
#[async_trait]
pub trait FetchArticles: Send + Sync {
    async fn fetch_feed(&self, source: &FeedSource, max_items: usize) -> Result<Vec<Article>>;

    async fn fetch_all(&self, sources: &[FeedSource], max_items: usize) -> Vec<Article> {
        let mut all_articles = Vec::new();

        for source in sources {
            match self.fetch_feed(source, max_items).await {
                Ok(articles) => {
                    info!("Fetched {} articles from {}", articles.len(), source.name);
                    all_articles.extend(articles);
                }
                Err(e) => {
                    error!("Error fetching feed {}: {}", source.name, e);
                }
            }
        }

        all_articles
    }
}

/// HTTP feed fetcher backed by a shared `reqwest` client.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Parse raw feed XML into normalized articles, keeping at most
    /// `max_items` entries in feed order. Exposed separately from the HTTP
    /// path so feed documents can be processed without a network round trip.
    pub fn parse_feed(
        source: &FeedSource,
        content: &[u8],
        max_items: usize,
    ) -> Result<Vec<Article>> {
        let feed = parser::parse(content)
            .map_err(|e| CollectorError::Parse(format!("{}: {}", source.name, e)))?;

        let articles = feed
            .entries
            .into_iter()
            .take(max_items)
            .filter_map(|entry| parse_entry(entry, &source.name))
            .collect();

        Ok(articles)
    }
}

#[async_trait]
impl FetchArticles for Fetcher {
    async fn fetch_feed(&self, source: &FeedSource, max_items: usize) -> Result<Vec<Article>> {
        debug!("Fetching feed: {} ({})", source.name, source.url);

        let response = self.client.get(&source.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CollectorError::General(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.bytes().await?;
        Self::parse_feed(source, &body, max_items)
    }
}

/// Normalize one feed entry, or drop it when title or URL is missing.
fn parse_entry(entry: feed_rs::model::Entry, source_name: &str) -> Option<Article> {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .unwrap_or_default();
    if title.is_empty() {
        debug!("Dropping entry without title from {}", source_name);
        return None;
    }

    let url = entry
        .links
        .first()
        .map(|l| l.href.trim().to_string())
        .unwrap_or_default();
    if url.is_empty() {
        debug!("Dropping entry without link from {}", source_name);
        return None;
    }

    // Prefer the explicit publication date, fall back to the updated date,
    // and never invent one when both are absent.
    let published = entry.published.or(entry.updated);

    // feed-rs folds the RSS <description> into `summary`, so the body
    // fallback chain is summary, then the first content block.
    let raw_body = entry
        .summary
        .map(|s| s.content)
        .or_else(|| entry.content.and_then(|c| c.body))
        .unwrap_or_default();
    let content = strip_html(&raw_body);

    let authors: Vec<String> = entry
        .authors
        .iter()
        .map(|a| a.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    let authors = if authors.is_empty() {
        "Unknown".to_string()
    } else {
        authors.join(", ")
    };

    Some(Article {
        title,
        url,
        source: source_name.to_string(),
        published,
        content,
        authors,
    })
}
