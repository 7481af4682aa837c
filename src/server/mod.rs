//! Server module for building HTTP servers with registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - guarded CRUD routes for every resource declared in modules
//! - health check routes
//! - JSON fallbacks for unknown paths and unsupported methods

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
