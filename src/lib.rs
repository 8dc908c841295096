/// portico library
///
/// Multi-tenant content backend: one SQLite database per company,
/// served through a concurrency-safe connection registry.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod tenant;

// Re-exports for convenience
pub use config::Config;
pub use core::AppContext;
pub use db::{ConnectionRegistry, Database};
pub use error::{CmsError, Result};
