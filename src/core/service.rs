//! Service trait for record storage

use crate::core::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for managing one collection of records
///
/// Handlers only ever talk to this trait, so any backend can sit behind
/// the API. Ids are compared as plain text.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Append a new record
    async fn create(&self, entity: T) -> Result<T>;

    /// Get a record by id
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all records in insertion order
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing record
    ///
    /// Fails if no record has the given id.
    async fn update(&self, id: &str, entity: T) -> Result<T>;

    /// Delete a record, returning it if it existed
    async fn delete(&self, id: &str) -> Result<Option<T>>;
}

