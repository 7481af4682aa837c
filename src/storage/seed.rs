//! Seed data for the in-memory collections

use crate::core::DataService;
use crate::entities::{Dish, Order};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixtures compiled into the binary
const BUNDLED_SEED: &str = include_str!("../../data/seed.yaml");

/// Dishes and orders to load at startup
///
/// Uses the same field names as the HTTP API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    /// The bundled fixtures
    pub fn bundled() -> Result<Self> {
        Self::from_yaml_str(BUNDLED_SEED).context("bundled seed data is invalid")
    }

    /// Load seed data from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: Self = serde_yaml::from_str(yaml)?;
        seed.check()?;
        Ok(seed)
    }

    /// Load seed data from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid seed file '{}'", path.display()))
    }

    /// Load from `path` when given, otherwise the bundled fixtures
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Self::bundled(),
        }
    }

    /// Insert every record through the stores
    pub async fn apply(
        &self,
        dishes: &dyn DataService<Dish>,
        orders: &dyn DataService<Order>,
    ) -> Result<()> {
        for dish in &self.dishes {
            dishes.create(dish.clone()).await?;
        }
        for order in &self.orders {
            orders.create(order.clone()).await?;
        }

        tracing::info!(
            dishes = self.dishes.len(),
            orders = self.orders.len(),
            "seed data loaded"
        );
        Ok(())
    }

    /// Fixtures must hold the same invariants the API enforces
    fn check(&self) -> Result<()> {
        for dish in &self.dishes {
            if dish.id.is_empty() {
                bail!("dish '{}' has an empty id", dish.name);
            }
            if dish.price == 0 {
                bail!("dish '{}' must have a price greater than 0", dish.id);
            }
        }
        for order in &self.orders {
            if order.id.is_empty() {
                bail!("order for '{}' has an empty id", order.deliver_to);
            }
            if order.dishes.is_empty() {
                bail!("order '{}' must include one dish", order.id);
            }
            if order.dishes.iter().any(|item| item.quantity == 0) {
                bail!("order '{}' has a dish with quantity 0", order.id);
            }
        }
        Ok(())
    }
}
