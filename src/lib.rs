//! # GrubDash
//!
//! A REST API for a restaurant ordering service, managing **dishes** and
//! **orders** held in memory.
//!
//! ## Features
//!
//! - **Guarded routes**: read/update/delete resolve the record first and
//!   answer 404 when it does not exist
//! - **Validation chains**: presence checks, the dish price rule, the order
//!   line-item rule and the order status rule run before every write
//! - **Injected storage**: handlers talk to a `DataService<T>`, so tests get
//!   isolated stores
//! - **Seed fixtures**: YAML fixtures loaded at startup
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | /dishes | list |
//! | GET, PUT | /dishes/{dishId} | read, update |
//! | POST | /dishes | create |
//! | GET | /orders | list |
//! | GET, PUT, DELETE | /orders/{orderId} | read, update, delete |
//! | POST | /orders | create |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let module = RestaurantModule::in_memory();
//! SeedData::bundled()?
//!     .apply(module.dishes.as_ref(), module.orders.as_ref())
//!     .await?;
//!
//! ServerBuilder::new()
//!     .register_module(module)
//!     .serve("127.0.0.1:5000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod module;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, DataService, Entity, Found, Module, Payload, ValidationError, next_id,
    };

    // === Resources ===
    pub use crate::entities::{Dish, LineItem, Order, OrderStatus};
    pub use crate::module::RestaurantModule;

    // === Storage ===
    pub use crate::storage::{InMemoryDataService, SeedData};

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
