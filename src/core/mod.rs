//! Core module containing fundamental traits and types for the service

pub mod entity;
pub mod error;
pub mod extractors;
pub mod id;
pub mod module;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{ApiError, ValidationError};
pub use extractors::{Found, Payload};
pub use id::next_id;
pub use module::Module;
pub use service::DataService;
