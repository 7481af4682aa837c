//! Entity registry collecting the routes of every resource

use axum::Router;

/// Trait that describes how to build routes for a resource
///
/// Each resource (Dish, Order) implements this trait to provide its
/// guarded CRUD routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "dish")
    fn entity_type(&self) -> &str;

    /// The plural form used as the URL prefix (e.g., "dishes")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, with their state already applied
    fn build_routes(&self) -> Router;
}

/// Registry for all resources served by the application
///
/// Descriptors keep their registration order. Registering the same entity
/// type twice replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        match self
            .descriptors
            .iter_mut()
            .find(|d| d.entity_type() == descriptor.entity_type())
        {
            Some(slot) => *slot = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// Build a router with all registered resource routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    /// URL prefixes of the registered resources
    pub fn resource_paths(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}
