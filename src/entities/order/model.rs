//! Order entity model

use crate::core::Entity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order
///
/// Transitions are not tracked; each write is validated on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

/// One dish within an order
///
/// Besides the referenced dish `id` and the `quantity`, any other fields
/// the client sent with the line item are kept as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A customer order
///
/// `status` is kept as the text the client sent. Only updates check it
/// against the lifecycle values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub dishes: Vec<LineItem>,
}

fn default_status() -> String {
    OrderStatus::default().to_string()
}

impl Order {
    /// The stored status, if it is one of the lifecycle values
    pub fn lifecycle_status(&self) -> Option<OrderStatus> {
        self.status.parse().ok()
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn display_name() -> &'static str {
        "Order"
    }

    fn path_param() -> &'static str {
        "orderId"
    }

    fn id(&self) -> &str {
        &self.id
    }
}
