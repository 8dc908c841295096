/// Tenant database handle with connection pooling
///
/// Provides a thread-safe connection pool to one tenant's SQLite file.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Maximum number of database connections in the pool
const MAX_CONNECTIONS: u32 = 5;

/// Handle to one tenant's database, backed by a connection pool
///
/// Cloning is cheap and every clone shares the same pool, so handing a
/// `Database` to each request keeps a single pool per tenant.
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (or create) the tenant database at the given path
    ///
    /// # Arguments
    /// * `db_path` - Path to the tenant's SQLite database file
    ///
    /// # Returns
    /// * `Ok(Database)` - Successfully opened database handle
    /// * `Err(CmsError)` - If connection fails
    pub async fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Configure SQLite options
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true)
            .foreign_keys(true)
            .disable_statement_logging();

        // Create connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path,
        };

        // Initialize schema
        db.initialize_schema().await?;

        Ok(db)
    }

    /// Create a test database in memory
    ///
    /// Used for testing. Creates a fresh database for each test.
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let db = Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        };

        db.initialize_schema().await?;

        Ok(db)
    }

    /// Initialize database schema
    ///
    /// Creates all content tables and indexes if they don't exist.
    async fn initialize_schema(&self) -> Result<()> {
        let schema = include_str!("../../database/schema.sql");

        // Drop comment lines before splitting: a ';' inside a comment
        // would otherwise produce a fragment that isn't valid SQL
        let statements: String = schema
            .lines()
            .filter(|line| !line.trim_start().starts_with("--"))
            .collect::<Vec<_>>()
            .join("\n");

        // SQLite doesn't support multiple statements in execute,
        // so we need to split and execute each statement
        for statement in statements.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(self.pool.as_ref()).await?;
            }
        }

        Ok(())
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by query modules.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close all connections in the pool
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Get database statistics
    ///
    /// Returns content counts and pool state for the status surface.
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let client_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM clients")
            .fetch_one(self.pool.as_ref())
            .await?;

        let banner_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM banners")
            .fetch_one(self.pool.as_ref())
            .await?;

        let video_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videos")
            .fetch_one(self.pool.as_ref())
            .await?;

        let flash_news_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flash_news")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(DatabaseStats {
            total_clients: client_count.0,
            total_banners: banner_count.0,
            total_videos: video_count.0,
            total_flash_news: flash_news_count.0,
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
        })
    }
}

/// Database statistics
#[derive(Debug, Clone)]
pub struct DatabaseStats {
    pub total_clients: i64,
    pub total_banners: i64,
    pub total_videos: i64,
    pub total_flash_news: i64,
    pub pool_size: u32,
    pub idle_connections: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::new_test().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_database_stats() {
        let db = Database::new_test().await.unwrap();
        let stats = db.stats().await.unwrap();

        assert_eq!(stats.total_clients, 0);
        assert_eq!(stats.total_banners, 0);
        assert_eq!(stats.total_videos, 0);
        assert_eq!(stats.total_flash_news, 0);
    }

    #[tokio::test]
    async fn test_schema_initialization() {
        let db = Database::new_test().await.unwrap();

        // Verify tables exist by querying them
        let result: Result<(i64,)> = sqlx::query_as("SELECT COUNT(*) FROM price_plans")
            .fetch_one(db.pool())
            .await
            .map_err(Into::into);

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_schema_applies_with_comments() {
        // The shipped schema starts with comment lines; applying it must
        // succeed and stay a no-op on a second open of the same file
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tenant.db");

        Database::new(&path).await.unwrap();
        let db = Database::new(&path).await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.total_clients, 0);
    }

    #[tokio::test]
    async fn test_clones_share_pool() {
        let db = Database::new_test().await.unwrap();
        let other = db.clone();

        assert!(std::ptr::eq(db.pool(), other.pool()));
    }
}
