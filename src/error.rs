/// Error types for portico
///
/// This module defines all possible errors that can occur in the backend.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for portico operations
#[derive(Error, Debug)]
pub enum CmsError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tenant database name is empty or contains illegal characters
    #[error("Invalid tenant database name: '{0}'")]
    InvalidTenantName(String),

    /// Opening a tenant's database failed
    #[error("Failed to open database '{db_name}': {reason}")]
    Connection { db_name: String, reason: String },

    /// No tenant registered under the given company code
    #[error("Unknown company code: {0}")]
    TenantNotFound(String),

    /// A requested record does not exist
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for portico operations
pub type Result<T> = std::result::Result<T, CmsError>;

/// Convert CmsError to a user-friendly error message
impl CmsError {
    pub fn user_message(&self) -> String {
        match self {
            CmsError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            CmsError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            CmsError::InvalidTenantName(name) => {
                format!("'{}' is not a valid tenant database name", name)
            }
            CmsError::Connection { db_name, reason } => {
                format!("Could not open the database for '{}': {}", db_name, reason)
            }
            CmsError::TenantNotFound(code) => {
                format!("No company registered under code '{}'", code)
            }
            CmsError::RecordNotFound(what) => {
                format!("{} was not found", what)
            }
            CmsError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            CmsError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            CmsError::Generic(msg) => msg.clone(),
        }
    }
}
