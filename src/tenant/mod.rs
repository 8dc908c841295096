/// Tenant module for portico
///
/// Maps opaque company codes to the database names the registry uses.

pub mod resolver;

pub use resolver::{TenantRecord, TenantResolver};
