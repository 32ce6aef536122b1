//! Static RSS feed registry.
//!
//! Sources marked `always_include` bypass the relevance filter; everything
//! else must clear keyword classification before it is stored.

use crate::types::FeedSource;
use url::Url;

/// Build the configured feed registry, in the order sources are fetched.
pub fn default_sources() -> Vec<FeedSource> {
    vec![
        // AI-focused sources (filtered)
        FeedSource::new("https://openai.com/news/rss.xml", "OpenAI News", false),
        FeedSource::new(
            "https://blog.google/innovation-and-ai/technology/ai/rss/",
            "Google AI Blog",
            false,
        ),
        FeedSource::new("https://nvidianews.nvidia.com/rss.xml", "NVIDIA News", false),
        // Sustainability-focused sources (always include)
        FeedSource::new(
            "https://blog.google/company-news/outreach-and-initiatives/sustainability/rss/",
            "Google Sustainability",
            true,
        ),
        // Peer-reviewed journals (filtered)
        FeedSource::new("https://www.nature.com/nm.rss", "Nature Medicine", false),
        FeedSource::new(
            "https://www.nature.com/natsustain.rss",
            "Nature Sustainability",
            false,
        ),
        FeedSource::new(
            "https://www.nature.com/nclimate.rss",
            "Nature Climate Change",
            false,
        ),
        FeedSource::new(
            "https://www.science.org/rss/news_current.xml",
            "Science Magazine",
            false,
        ),
        // UN News (filtered)
        FeedSource::new(
            "https://news.un.org/feed/subscribe/en/news/topic/health/feed/rss.xml",
            "UN Health News",
            false,
        ),
        FeedSource::new(
            "https://news.un.org/feed/subscribe/en/news/topic/climate-change/feed/rss.xml",
            "UN Climate Change",
            false,
        ),
        FeedSource::new(
            "https://news.un.org/feed/subscribe/en/news/topic/sdgs/feed/rss.xml",
            "UN SDGs",
            false,
        ),
        // General tech news (filtered)
        FeedSource::new(
            "https://www.apple.com/newsroom/rss-feed.rss",
            "Apple Newsroom",
            false,
        ),
    ]
}

/// Validate a feed endpoint URL (http/https with a host).
pub fn is_valid_feed_url(url_str: &str) -> bool {
    match Url::parse(url_str) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host().is_some(),
        Err(_) => false,
    }
}
