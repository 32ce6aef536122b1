use std::env;

/// Runtime settings, read from environment variables with defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub max_per_feed: usize,
    /// Hour (UTC, 0-23) at which the daily scheduled collection runs.
    pub collection_hour: u32,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/greenai.db".to_string());

        let max_per_feed = env::var("MAX_PER_FEED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let collection_hour = env::var("COLLECTION_HOUR")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|h| *h < 24)
            .unwrap_or(6);

        Self {
            database_url,
            max_per_feed,
            collection_hour,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_env()
    }
}
