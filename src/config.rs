/// Backend configuration
///
/// Where tenant databases and the tenant directory live on disk.

use crate::error::{CmsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the tenant directory inside the storage root
const TENANT_DIRECTORY_FILE: &str = "tenants.json";

/// Runtime configuration for the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one SQLite file per tenant plus tenants.json
    pub storage_root: PathBuf,
}

impl Config {
    /// Default configuration rooted under the user's home directory
    pub fn default_paths() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CmsError::Config("could not find home directory".to_string()))?;

        Ok(Self {
            storage_root: home.join(".portico"),
        })
    }

    /// Configuration with an explicit storage root (tests, deployments)
    pub fn with_storage_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            storage_root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of the tenant directory file
    pub fn tenant_directory_path(&self) -> PathBuf {
        self.storage_root.join(TENANT_DIRECTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root() {
        let config = Config::with_storage_root("/tmp/portico-test");
        assert_eq!(config.storage_root, PathBuf::from("/tmp/portico-test"));
        assert_eq!(
            config.tenant_directory_path(),
            PathBuf::from("/tmp/portico-test/tenants.json")
        );
    }
}
