//! Dish entity model

use crate::core::Entity;
use serde::{Deserialize, Serialize};

/// A dish on the menu
///
/// `price` is in cents and always a positive whole number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn display_name() -> &'static str {
        "Dish"
    }

    fn path_param() -> &'static str {
        "dishId"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
