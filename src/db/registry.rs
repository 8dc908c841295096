/// Tenant connection registry
///
/// Maps a tenant's database name to a lazily opened, cached `Database`
/// handle. At most one handle is ever constructed per tenant, no matter
/// how many requests race on the first access.

use crate::db::Database;
use crate::error::{CmsError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

/// File extension for tenant database files
const DB_FILE_EXTENSION: &str = "db";

/// Database names are plain identifiers; anything else (path separators,
/// dots, empty strings) is rejected before the filesystem is touched.
const DB_NAME_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_-]*$";

/// Registry of open tenant databases
///
/// The map only grows: handles are reused for the process lifetime and
/// never evicted. That is fine for the intended workload (a small, fixed
/// set of companies); if tenant count ever becomes unbounded this needs
/// an eviction policy instead.
///
/// Construct one per process and pass it around - it is not a global, so
/// every test can build its own over a temp directory.
pub struct ConnectionRegistry {
    storage_root: PathBuf,
    connections: Mutex<HashMap<String, Arc<OnceCell<Database>>>>,
    opened: AtomicU64,
    name_pattern: Regex,
}

impl ConnectionRegistry {
    /// Create an empty registry storing tenant files under `storage_root`
    pub fn new<P: AsRef<Path>>(storage_root: P) -> Self {
        // Compile once so every lookup doesn't pay for it
        let name_pattern = Regex::new(DB_NAME_PATTERN).expect("db name pattern is valid");

        Self {
            storage_root: storage_root.as_ref().to_path_buf(),
            connections: Mutex::new(HashMap::new()),
            opened: AtomicU64::new(0),
            name_pattern,
        }
    }

    /// Get the cached handle for a tenant, opening it on first access
    ///
    /// Concurrent first accesses for the same name coalesce into a single
    /// construction; callers for other tenants are never blocked by it.
    /// A failed construction leaves no entry behind, so the next call for
    /// that tenant retries from scratch.
    ///
    /// # Arguments
    /// * `db_name` - The tenant's database name (no path, no extension)
    ///
    /// # Returns
    /// * `Ok(Database)` - Handle sharing the tenant's single pool
    /// * `Err(CmsError::InvalidTenantName)` - Malformed name
    /// * `Err(CmsError::Connection)` - Opening the database failed
    pub async fn get_connection(&self, db_name: &str) -> Result<Database> {
        self.validate_name(db_name)?;

        // Atomic get-or-insert of the tenant's cell. The map lock is only
        // held for the lookup, never across the (possibly slow) open.
        let cell = {
            let mut map = self.connections.lock().await;
            Arc::clone(map.entry(db_name.to_string()).or_default())
        };

        let db = cell
            .get_or_try_init(|| async {
                let path = self.db_path(db_name);
                let db = Database::new(&path)
                    .await
                    .map_err(|e| CmsError::Connection {
                        db_name: db_name.to_string(),
                        reason: e.to_string(),
                    })?;
                self.opened.fetch_add(1, Ordering::Relaxed);
                Ok::<_, CmsError>(db)
            })
            .await?;

        Ok(db.clone())
    }

    /// Directory the tenant database files live in
    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Number of databases successfully opened since process start
    pub fn connections_opened(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }

    /// Number of tenants with a live cached handle
    pub async fn tenant_count(&self) -> usize {
        let map = self.connections.lock().await;
        map.values().filter(|cell| cell.get().is_some()).count()
    }

    /// Close every cached handle's pool
    ///
    /// Should be called on application shutdown.
    pub async fn close_all(&self) {
        let cells: Vec<Arc<OnceCell<Database>>> = {
            let map = self.connections.lock().await;
            map.values().cloned().collect()
        };

        for cell in cells {
            if let Some(db) = cell.get() {
                db.close().await;
            }
        }
    }

    /// Full path of a tenant's database file
    fn db_path(&self, db_name: &str) -> PathBuf {
        self.storage_root
            .join(format!("{}.{}", db_name, DB_FILE_EXTENSION))
    }

    /// Reject names that are empty or could escape the storage root
    fn validate_name(&self, db_name: &str) -> Result<()> {
        if !self.name_pattern.is_match(db_name) {
            return Err(CmsError::InvalidTenantName(db_name.to_string()));
        }

        Ok(())
    }
}
