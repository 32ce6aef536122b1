use crate::types::{Article, Classification, Result};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info};

/// SQLite-backed article store. Append-only from the pipeline's point of
/// view: the pipeline reads the known URL set, then inserts new rows. No
/// updates or deletes.
pub struct SqliteStore {
    db: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let db = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self { db })
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                url TEXT NOT NULL UNIQUE,
                source TEXT NOT NULL,
                published_date TEXT,
                fetched_date TEXT NOT NULL,
                content TEXT,
                authors TEXT
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS classifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                article_id INTEGER NOT NULL REFERENCES articles(id),
                category TEXT NOT NULL,
                confidence REAL,
                relevancy_score REAL,
                classified_date TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        info!("Database schema initialized");
        Ok(())
    }

    /// Bulk-load every known article URL for deduplication.
    pub async fn existing_urls(&self) -> Result<HashSet<String>> {
        let urls: Vec<String> = sqlx::query_scalar("SELECT url FROM articles")
            .fetch_all(&self.db)
            .await?;
        Ok(urls.into_iter().collect())
    }

    /// Persist an accepted batch in one transaction. Each article and its
    /// optional classification commit as a single logical unit; nothing is
    /// visible until the whole batch commits.
    pub async fn insert_batch(
        &self,
        accepted: &[(Article, Option<Classification>)],
    ) -> Result<usize> {
        let mut tx = self.db.begin().await?;
        let now = Utc::now();

        for (article, classification) in accepted {
            let result = sqlx::query(
                r#"
                INSERT INTO articles (title, url, source, published_date, fetched_date, content, authors)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&article.title)
            .bind(&article.url)
            .bind(&article.source)
            .bind(article.published)
            .bind(now)
            .bind(&article.content)
            .bind(&article.authors)
            .execute(&mut *tx)
            .await?;

            if let Some(classification) = classification {
                let article_id = result.last_insert_rowid();
                sqlx::query(
                    r#"
                    INSERT INTO classifications (article_id, category, confidence, relevancy_score, classified_date)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(article_id)
                .bind(classification.category.display_name())
                .bind(classification.confidence)
                .bind(classification.relevancy_score)
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        debug!("Stored {} new articles", accepted.len());
        Ok(accepted.len())
    }

    /// Number of stored articles.
    pub async fn article_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}
