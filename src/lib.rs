pub mod classifier;
pub mod config;
pub mod fetcher;
pub mod pipeline;
pub mod sanitize;
pub mod scheduler;
pub mod sources;
pub mod store;
pub mod types;

pub use config::Settings;
pub use fetcher::{FetchArticles, FetchConfig, Fetcher};
pub use pipeline::{Collector, RunOutcome};
pub use sanitize::strip_html;
pub use store::SqliteStore;
pub use types::*;
