//! Restaurant resources: dishes and orders

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor};
pub use order::{LineItem, Order, OrderDescriptor, OrderStatus};
