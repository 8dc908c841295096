/// Company-code to database-name resolution
///
/// The tenant directory is a JSON file under the storage root. It is read
/// once at startup and rewritten on every registration change, so the
/// on-disk copy always matches what the process serves.

use crate::error::{CmsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Company codes follow the same identifier rules as database names
const CODE_PATTERN: &str = r"^[A-Za-z0-9][A-Za-z0-9_-]*$";

/// One registered company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRecord {
    pub company_code: String,
    pub company_name: String,
    pub db_name: String,
    pub active: bool,
}

/// Resolves company codes to tenant database names
pub struct TenantResolver {
    directory_path: PathBuf,
    directory: RwLock<HashMap<String, TenantRecord>>,
    code_pattern: Regex,
}

impl TenantResolver {
    /// Load the tenant directory from disk
    ///
    /// A missing directory file means an empty directory, not an error -
    /// a fresh deployment starts with zero tenants.
    pub fn load<P: AsRef<Path>>(directory_path: P) -> Result<Self> {
        let directory_path = directory_path.as_ref().to_path_buf();

        let directory = if directory_path.exists() {
            let raw = std::fs::read_to_string(&directory_path)?;
            let records: Vec<TenantRecord> = serde_json::from_str(&raw)?;
            records
                .into_iter()
                .map(|r| (r.company_code.clone(), r))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            directory_path,
            directory: RwLock::new(directory),
            code_pattern: Regex::new(CODE_PATTERN).expect("company code pattern is valid"),
        })
    }

    /// Resolve a company code to its database name
    ///
    /// # Returns
    /// * `Ok(String)` - The tenant's database name
    /// * `Err(CmsError::TenantNotFound)` - Unknown or deactivated code
    pub async fn resolve(&self, company_code: &str) -> Result<String> {
        let directory = self.directory.read().await;

        match directory.get(company_code) {
            Some(record) if record.active => Ok(record.db_name.clone()),
            _ => Err(CmsError::TenantNotFound(company_code.to_string())),
        }
    }

    /// Register a new company
    ///
    /// Rejects malformed codes and duplicate registrations, then persists
    /// the updated directory before returning.
    pub async fn register(&self, record: TenantRecord) -> Result<()> {
        if !self.code_pattern.is_match(&record.company_code) {
            return Err(CmsError::InvalidTenantName(record.company_code));
        }
        if !self.code_pattern.is_match(&record.db_name) {
            return Err(CmsError::InvalidTenantName(record.db_name));
        }

        let mut directory = self.directory.write().await;

        if directory.contains_key(&record.company_code) {
            return Err(CmsError::Config(format!(
                "company code '{}' is already registered",
                record.company_code
            )));
        }

        // Persist a candidate copy first; the served map only changes
        // once the new directory is safely on disk
        let mut updated = directory.clone();
        updated.insert(record.company_code.clone(), record);
        self.persist(&updated)?;

        *directory = updated;
        Ok(())
    }

    /// Deactivate a company without deleting its data
    pub async fn deactivate(&self, company_code: &str) -> Result<()> {
        let mut directory = self.directory.write().await;

        let mut updated = directory.clone();
        let record = updated
            .get_mut(company_code)
            .ok_or_else(|| CmsError::TenantNotFound(company_code.to_string()))?;
        record.active = false;

        self.persist(&updated)?;

        *directory = updated;
        Ok(())
    }

    /// All registered companies, sorted by code
    pub async fn tenants(&self) -> Vec<TenantRecord> {
        let directory = self.directory.read().await;
        let mut records: Vec<TenantRecord> = directory.values().cloned().collect();
        records.sort_by(|a, b| a.company_code.cmp(&b.company_code));
        records
    }

    /// Write the directory back to disk
    fn persist(&self, directory: &HashMap<String, TenantRecord>) -> Result<()> {
        if let Some(parent) = self.directory_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut records: Vec<&TenantRecord> = directory.values().collect();
        records.sort_by(|a, b| a.company_code.cmp(&b.company_code));

        let raw = serde_json::to_string_pretty(&records)?;
        std::fs::write(&self.directory_path, raw)?;

        Ok(())
    }
}
