/// Database module for portico
///
/// Handles all per-tenant database operations using SQLite and sqlx.
/// The registry guarantees one cached connection pool per tenant.

pub mod connection;
pub mod models;
pub mod queries;
pub mod registry;

pub use connection::Database;
pub use models::*;
pub use registry::ConnectionRegistry;
