/// Application context
///
/// Owns the configuration, the tenant resolver, and the connection
/// registry. Everything that serves a request goes through one of these;
/// there is no global state anywhere, so tests build their own context
/// over a temp directory.

use crate::config::Config;
use crate::db::{ConnectionRegistry, Database};
use crate::error::Result;
use crate::tenant::{TenantRecord, TenantResolver};

/// Shared application state
pub struct AppContext {
    config: Config,
    resolver: TenantResolver,
    registry: ConnectionRegistry,
}

impl AppContext {
    /// Initialize the backend: create the storage root, load the tenant
    /// directory, and start with an empty connection registry
    pub fn init(config: Config) -> Result<Self> {
        std::fs::create_dir_all(&config.storage_root)?;

        let resolver = TenantResolver::load(config.tenant_directory_path())?;
        let registry = ConnectionRegistry::new(&config.storage_root);

        Ok(Self {
            config,
            resolver,
            registry,
        })
    }

    /// Get the database handle for a company code
    ///
    /// This is the one path every consumer uses: resolve the code to a
    /// database name, then fetch (or lazily open) the cached connection.
    pub async fn database_for(&self, company_code: &str) -> Result<Database> {
        let db_name = self.resolver.resolve(company_code).await?;
        self.registry.get_connection(&db_name).await
    }

    /// Register a new company and open its database immediately
    ///
    /// Opening up front surfaces storage problems at registration time
    /// instead of on the first request.
    pub async fn register_tenant(&self, record: TenantRecord) -> Result<Database> {
        let db_name = record.db_name.clone();
        self.resolver.register(record).await?;
        self.registry.get_connection(&db_name).await
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The tenant resolver
    pub fn resolver(&self) -> &TenantResolver {
        &self.resolver
    }

    /// The connection registry
    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Close every open tenant database
    pub async fn shutdown(&self) {
        self.registry.close_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ClientInput;
    use crate::error::CmsError;
    use tempfile::TempDir;

    fn record(code: &str) -> TenantRecord {
        TenantRecord {
            company_code: code.to_string(),
            company_name: format!("{} Pvt Ltd", code),
            db_name: format!("{}_cms", code),
            active: true,
        }
    }

    #[tokio::test]
    async fn test_database_for_unknown_company() {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::init(Config::with_storage_root(dir.path())).unwrap();

        let err = ctx.database_for("ghost").await.unwrap_err();
        assert!(matches!(err, CmsError::TenantNotFound(_)));
    }

    #[tokio::test]
    async fn test_register_then_serve() {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::init(Config::with_storage_root(dir.path())).unwrap();

        let db = ctx.register_tenant(record("acme")).await.unwrap();
        db.create_client(ClientInput {
            name: "First customer".to_string(),
            phone: None,
            email: None,
            address: None,
        })
        .await
        .unwrap();

        // The request path returns the same cached handle
        let again = ctx.database_for("acme").await.unwrap();
        assert!(std::ptr::eq(db.pool(), again.pool()));
        assert_eq!(ctx.registry().connections_opened(), 1);

        let clients = again.list_clients(None).await.unwrap();
        assert_eq!(clients.len(), 1);
    }

    #[tokio::test]
    async fn test_context_is_isolated_per_instance() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();

        let ctx_a = AppContext::init(Config::with_storage_root(dir_a.path())).unwrap();
        let ctx_b = AppContext::init(Config::with_storage_root(dir_b.path())).unwrap();

        ctx_a.register_tenant(record("acme")).await.unwrap();

        // The second context never heard of acme
        let err = ctx_b.database_for("acme").await.unwrap_err();
        assert!(matches!(err, CmsError::TenantNotFound(_)));
    }
}
