//! Ingestion pipeline: fetch every registered feed, classify, deduplicate
//! by URL, and hand the accepted batch to the store in one transaction.

use crate::classifier::classify;
use crate::fetcher::FetchArticles;
use crate::store::SqliteStore;
use crate::types::{Article, Classification, FeedSource, Result, RunStats};
use std::collections::HashSet;
use tracing::{debug, info};

/// Output of one pipeline run: the accepted (article, classification) pairs
/// in fetch order, plus the aggregate counts.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub accepted: Vec<(Article, Option<Classification>)>,
    pub stats: RunStats,
}

/// Run the collection pipeline over `sources` without touching storage.
///
/// `existing_urls` seeds the dedup set; URLs accepted earlier in the same
/// run also count as duplicates (exact, case-sensitive match). Articles
/// from always-include sources bypass the relevance filter: they are still
/// classified so category and score metadata can be stored, but a
/// not-relevant outcome does not reject them.
pub async fn run(
    fetcher: &dyn FetchArticles,
    sources: &[FeedSource],
    max_per_feed: usize,
    existing_urls: &HashSet<String>,
) -> RunOutcome {
    let always_include: HashSet<&str> = sources
        .iter()
        .filter(|s| s.always_include)
        .map(|s| s.name.as_str())
        .collect();

    let articles = fetcher.fetch_all(sources, max_per_feed).await;
    info!("Fetched {} articles from {} feeds", articles.len(), sources.len());

    let mut outcome = RunOutcome::default();
    let mut seen_urls: HashSet<String> = HashSet::new();

    for article in articles {
        if existing_urls.contains(&article.url) || seen_urls.contains(&article.url) {
            outcome.stats.duplicate += 1;
            continue;
        }

        let classification = classify(&article.title, &article.content);

        if classification.is_none() && !always_include.contains(article.source.as_str()) {
            debug!("Filtered out: {}", article.title);
            outcome.stats.filtered += 1;
            continue;
        }

        seen_urls.insert(article.url.clone());
        outcome.stats.new += 1;
        outcome.accepted.push((article, classification));
    }

    outcome
}

/// Ties the fetcher, registry, and store together into the entry point the
/// CLI and scheduler invoke.
pub struct Collector {
    store: SqliteStore,
    fetcher: Box<dyn FetchArticles>,
    sources: Vec<FeedSource>,
}

impl Collector {
    pub fn new(store: SqliteStore, fetcher: Box<dyn FetchArticles>, sources: Vec<FeedSource>) -> Self {
        Self {
            store,
            fetcher,
            sources,
        }
    }

    /// Fetch, classify, deduplicate, and persist one batch.
    ///
    /// The accepted batch commits in a single transaction at the end of the
    /// run; a failure mid-run persists nothing. Store errors propagate to
    /// the caller.
    pub async fn collect(&self, max_per_feed: usize) -> Result<RunStats> {
        info!("Starting article collection ({} feeds)", self.sources.len());

        let existing_urls = self.store.existing_urls().await?;
        let outcome = run(
            self.fetcher.as_ref(),
            &self.sources,
            max_per_feed,
            &existing_urls,
        )
        .await;

        self.store.insert_batch(&outcome.accepted).await?;

        let stats = outcome.stats;
        info!(
            "Collection complete: {} new, {} duplicates, {} filtered",
            stats.new, stats.duplicate, stats.filtered
        );
        Ok(stats)
    }
}
