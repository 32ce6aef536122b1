use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configured RSS feed endpoint. The registry is an ordered, immutable
/// list built once at startup; sources are never added or removed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSource {
    pub url: String,
    pub name: String,
    /// Bypass the relevance filter: articles from this source are accepted
    /// even when classification yields no category.
    pub always_include: bool,
}

impl FeedSource {
    pub fn new(url: impl Into<String>, name: impl Into<String>, always_include: bool) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            always_include,
        }
    }
}

/// A normalized feed entry. Title and URL are guaranteed non-empty; entries
/// missing either are dropped during fetch. `url` is the sole dedup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub published: Option<DateTime<Utc>>,
    /// HTML-stripped, whitespace-collapsed body text.
    pub content: String,
    /// Comma-joined author names, or "Unknown".
    pub authors: String,
}

/// The three topical categories. Declaration order is the tie-break order
/// for category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Medicine,
    Planet,
    GreenAi,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Medicine, Category::Planet, Category::GreenAi];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Medicine => "AI for Medicine",
            Category::Planet => "AI for Planet",
            Category::GreenAi => "Green AI",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Outcome of a successful relevance classification. "Not relevant" is the
/// absence of a `Classification`, never a zeroed one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    /// Normalized match density in [0, 1].
    pub confidence: f64,
    /// Scaled match density in [0, 100].
    pub relevancy_score: f64,
}

/// Aggregate counts for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub new: usize,
    pub duplicate: usize,
    pub filtered: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
