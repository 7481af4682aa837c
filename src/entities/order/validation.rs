//! Order validation chain
//!
//! Create runs presence → dishes and stores the status unchecked. Update
//! runs presence → dishes → status, after the existence guard has loaded
//! the stored order.

use super::model::{LineItem, Order, OrderStatus};
use crate::core::ApiError;
use crate::core::validation::{
    conflicting_id, display_value, is_truthy, loose_number, require_fields, text_field,
    whole_number,
};
use serde_json::{Map, Value};

/// Text fields every order body must carry, checked in this order
pub const REQUIRED_FIELDS: [&str; 2] = ["deliverTo", "mobileNumber"];

pub const MISSING_DISHES: &str = "Order must include a dish.";
pub const EMPTY_DISHES: &str = "Order must include one dish";
/// The text lists "delivered", yet a requested status of "delivered" is rejected
pub const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, or delivered";
pub const DELIVERED_IS_FINAL: &str = "A delivered order cannot be changed";

/// Fields of an order body that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<LineItem>,
}

/// Check the line items of an order
///
/// Every line item must carry a whole `quantity` greater than zero. When
/// several items fail, the message names the last one.
pub fn validate_dishes(data: &Value) -> Result<Vec<LineItem>, ApiError> {
    let dishes = data.get("dishes");
    if !is_truthy(dishes) {
        return Err(ApiError::validation(MISSING_DISHES));
    }

    let items = match dishes {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(ApiError::validation(EMPTY_DISHES)),
    };

    let mut failure = None;
    let mut line_items = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match valid_quantity(item.get("quantity")) {
            Some(quantity) => line_items.push(line_item(item, quantity)),
            None => failure = Some(dish_label(item, index)),
        }
    }

    match failure {
        Some(label) => Err(ApiError::validation(format!(
            "Dish {} must have a quantity greater than 0.",
            label
        ))),
        None => Ok(line_items),
    }
}

/// Run presence → dishes over the `data` member of a request body
pub fn validate_order(data: &Value) -> Result<OrderFields, ApiError> {
    require_fields("Order", data, &REQUIRED_FIELDS)?;
    let dishes = validate_dishes(data)?;

    Ok(OrderFields {
        deliver_to: text_field("Order", data, "deliverTo")?,
        mobile_number: text_field("Order", data, "mobileNumber")?,
        dishes,
    })
}

/// Status text of a new order
///
/// Not validated: the supplied value is stored as sent. An absent or falsy
/// status becomes `pending`.
pub fn create_status(data: &Value) -> String {
    let status = data.get("status");
    match status {
        Some(value) if is_truthy(status) => display_value(value),
        _ => OrderStatus::Pending.to_string(),
    }
}

/// Check an order update against the route and the stored order
///
/// In order: the body id must match the route id, the requested status
/// must be pending, preparing or out-for-delivery, and the stored order
/// must not be delivered already.
pub fn validate_status(
    route_id: &str,
    existing: &Order,
    data: &Value,
) -> Result<OrderStatus, ApiError> {
    if let Some(body_id) = conflicting_id(data, route_id) {
        return Err(ApiError::validation(format!(
            "Order id doesn't match route id. Order {}, Route: {}",
            body_id, route_id
        )));
    }

    let requested = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<OrderStatus>().ok())
        .filter(|status| *status != OrderStatus::Delivered)
        .ok_or_else(|| ApiError::validation(INVALID_STATUS))?;

    if existing.lifecycle_status() == Some(OrderStatus::Delivered) {
        return Err(ApiError::validation(DELIVERED_IS_FINAL));
    }

    Ok(requested)
}

/// Deletion is only allowed while the order is still pending
pub fn validate_deletable(order: &Order) -> Result<(), ApiError> {
    if order.lifecycle_status() == Some(OrderStatus::Pending) {
        Ok(())
    } else {
        Err(ApiError::validation(format!(
            "Cannot delete order {}, as it is no longer pending.",
            order.id
        )))
    }
}

fn valid_quantity(quantity: Option<&Value>) -> Option<u64> {
    if !is_truthy(quantity) {
        return None;
    }
    let quantity = quantity?;
    if loose_number(quantity).is_some_and(|n| n <= 0.0) {
        return None;
    }
    whole_number(quantity)
        .filter(|q| *q > 0)
        .map(|q| q as u64)
}

/// How a line item is named in messages: its dish id, else its position
///
/// An item without a usable id is named `#<n>` (1-based) rather than
/// printing an undefined id.
fn dish_label(item: &Value, index: usize) -> String {
    match item.get("id") {
        Some(id @ (Value::String(_) | Value::Number(_))) => display_value(id),
        _ => format!("#{}", index + 1),
    }
}

fn line_item(item: &Value, quantity: u64) -> LineItem {
    let mut details: Map<String, Value> = item.as_object().cloned().unwrap_or_default();
    let id = details.remove("id").and_then(|id| match id {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    details.remove("quantity");

    LineItem {
        id,
        quantity,
        details,
    }
}
