//! Module definition for the restaurant ordering service
//!
//! Serves dishes and orders, each backed by its own `DataService`.

use crate::core::{DataService, Module};
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor};
use crate::server::entity_registry::EntityRegistry;
use crate::storage::InMemoryDataService;
use std::sync::Arc;

/// Restaurant ordering module
///
/// - Dishes: the menu
/// - Orders: customer orders referencing dishes
#[derive(Clone)]
pub struct RestaurantModule {
    pub dishes: Arc<dyn DataService<Dish>>,
    pub orders: Arc<dyn DataService<Order>>,
}

impl RestaurantModule {
    pub fn new(dishes: Arc<dyn DataService<Dish>>, orders: Arc<dyn DataService<Order>>) -> Self {
        Self { dishes, orders }
    }

    /// Module backed by fresh, empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryDataService::<Dish>::new()),
            Arc::new(InMemoryDataService::<Order>::new()),
        )
    }
}

impl Module for RestaurantModule {
    fn name(&self) -> &str {
        "grubdash"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["dishes", "orders"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(DishDescriptor::new(self.dishes.clone())));
        registry.register(Box::new(OrderDescriptor::new(self.orders.clone())));
    }
}
