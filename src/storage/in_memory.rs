//! In-memory implementation of DataService

use crate::core::{DataService, Entity};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory data service implementation
///
/// Records are kept in insertion order and found by a linear scan on id.
/// Each operation holds the lock only for its own duration. Cloning the
/// service shares the underlying collection.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T> InMemoryDataService<T> {
    /// Create a new, empty in-memory data service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::display_name(),
                entity.id()
            ));
        }

        records.push(entity.clone());
        tracing::debug!(resource = T::resource_name(), id = entity.id(), "record created");

        Ok(entity)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.clone())
    }

    async fn update(&self, id: &str, entity: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::display_name(), id))?;

        *slot = entity.clone();
        tracing::debug!(resource = T::resource_name(), id, "record updated");

        Ok(entity)
    }

    async fn delete(&self, id: &str) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let removed = records
            .iter()
            .position(|r| r.id() == id)
            .map(|index| records.remove(index));

        if removed.is_some() {
            tracing::debug!(resource = T::resource_name(), id, "record deleted");
        }

        Ok(removed)
    }
}
