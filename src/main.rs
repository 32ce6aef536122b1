use clap::{Parser, Subcommand};
use greenai_collector::{
    scheduler, sources, Collector, FetchConfig, Fetcher, Settings, SqliteStore,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "greenai-collector", about = "Collect and classify AI news from RSS feeds")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch articles from all configured feeds once and store them
    Fetch {
        /// Maximum articles to fetch per feed
        #[arg(long)]
        max_per_feed: Option<usize>,
    },
    /// Create the database schema
    InitDb,
    /// Run the daily collection loop
    Schedule,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    let store = SqliteStore::connect(&settings.database_url).await?;

    match cli.command {
        Command::InitDb => {
            store.init_schema().await?;
        }
        Command::Fetch { max_per_feed } => {
            store.init_schema().await?;
            let collector = build_collector(store);
            let stats = collector
                .collect(max_per_feed.unwrap_or(settings.max_per_feed))
                .await?;

            println!("Fetch Summary:");
            println!("  New articles: {}", stats.new);
            println!("  Duplicates: {}", stats.duplicate);
            println!("  Filtered: {}", stats.filtered);
        }
        Command::Schedule => {
            store.init_schema().await?;
            let collector = build_collector(store);
            info!("Starting scheduled collection");
            scheduler::run_daily(&collector, settings.collection_hour, settings.max_per_feed)
                .await;
        }
    }

    Ok(())
}

fn build_collector(store: SqliteStore) -> Collector {
    let fetcher = Fetcher::new(FetchConfig::default());
    Collector::new(store, Box::new(fetcher), sources::default_sources())
}
