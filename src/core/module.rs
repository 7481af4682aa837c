//! Module system
//!
//! A module groups the resources of one service and registers their
//! routes with the server.

use crate::server::entity_registry::EntityRegistry;

/// Trait for a service module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Resource names managed by this module (e.g., "dishes", "orders")
    fn entity_types(&self) -> Vec<&str>;

    /// Register entities with the entity registry
    ///
    /// Each entity descriptor provides the routes for that resource.
    fn register_entities(&self, registry: &mut EntityRegistry);
}
