/// Core functionality modules
///
/// Wires configuration, tenant resolution, and the connection registry
/// together, and hosts the client search logic.

pub mod context;
pub mod searcher;

pub use context::AppContext;
pub use searcher::Searcher;
