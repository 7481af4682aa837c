//! Dish validation chain: presence of text fields, then the price rule

use crate::core::ApiError;
use crate::core::validation::{conflicting_id, is_truthy, loose_number, require_fields, text_field, whole_number};
use serde_json::Value;

/// Text fields every dish body must carry, checked in this order
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "description", "image_url"];

pub const MISSING_PRICE: &str = "Dish must include a price.";
/// Sent for a price of zero or less
pub const PRICE_NOT_POSITIVE: &str = "Dish price must be a number.";
/// Sent for a price that is not a whole number
pub const PRICE_NOT_INTEGER: &str = "Dish price must be greater than 0.";

/// Fields of a dish body that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
}

/// Check the price rule: present, then positive, then a whole number
pub fn validate_price(data: &Value) -> Result<u64, ApiError> {
    let price = data.get("price");
    if !is_truthy(price) {
        return Err(ApiError::validation(MISSING_PRICE));
    }
    let price = price.unwrap_or(&Value::Null);

    if loose_number(price).is_some_and(|n| n <= 0.0) {
        return Err(ApiError::validation(PRICE_NOT_POSITIVE));
    }

    match whole_number(price) {
        Some(cents) if cents > 0 => Ok(cents as u64),
        Some(_) => Err(ApiError::validation(PRICE_NOT_POSITIVE)),
        None => Err(ApiError::validation(PRICE_NOT_INTEGER)),
    }
}

/// Run the full dish chain over the `data` member of a request body
pub fn validate_dish(data: &Value) -> Result<DishFields, ApiError> {
    require_fields("Dish", data, &REQUIRED_FIELDS)?;
    let price = validate_price(data)?;

    Ok(DishFields {
        name: text_field("Dish", data, "name")?,
        description: text_field("Dish", data, "description")?,
        image_url: text_field("Dish", data, "image_url")?,
        price,
    })
}

/// A dish update may only name the dish it targets
pub fn validate_route_id(route_id: &str, data: &Value) -> Result<(), ApiError> {
    match conflicting_id(data, route_id) {
        Some(body_id) => Err(ApiError::validation(format!(
            "dishId {} does not match data.id {}",
            route_id, body_id
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<impl std::fmt::Debug, ApiError>) -> String {
        result.unwrap_err().to_string()
    }

    fn body(price: Value) -> Value {
        json!({
            "name": "Dolcelatte and chickpea spaghetti",
            "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            "image_url": "https://images.example.com/spaghetti.jpg",
            "price": price,
        })
    }

    #[test]
    fn test_missing_price() {
        assert_eq!(message(validate_price(&json!({}))), MISSING_PRICE);
        assert_eq!(message(validate_price(&json!({ "price": 0 }))), MISSING_PRICE);
        assert_eq!(message(validate_price(&json!({ "price": "" }))), MISSING_PRICE);
    }

    #[test]
    fn test_non_positive_price() {
        assert_eq!(message(validate_price(&json!({ "price": -1 }))), PRICE_NOT_POSITIVE);
        assert_eq!(message(validate_price(&json!({ "price": -2.5 }))), PRICE_NOT_POSITIVE);
        assert_eq!(message(validate_price(&json!({ "price": "-4" }))), PRICE_NOT_POSITIVE);
    }

    #[test]
    fn test_non_integer_price() {
        assert_eq!(message(validate_price(&json!({ "price": 10.5 }))), PRICE_NOT_INTEGER);
        assert_eq!(message(validate_price(&json!({ "price": "17" }))), PRICE_NOT_INTEGER);
        assert_eq!(message(validate_price(&json!({ "price": true }))), PRICE_NOT_INTEGER);
        assert_eq!(message(validate_price(&json!({ "price": [] }))), PRICE_NOT_INTEGER);
    }

    #[test]
    fn test_valid_price() {
        assert_eq!(validate_price(&json!({ "price": 1900 })).unwrap(), 1900);
        assert_eq!(validate_price(&json!({ "price": 12.0 })).unwrap(), 12);
    }

    #[test]
    fn test_presence_runs_before_price() {
        let mut data = body(json!(-1));
        data["description"] = json!("");
        assert_eq!(message(validate_dish(&data)), "Dish must include a description");
    }

    #[test]
    fn test_valid_dish_fields() {
        let fields = validate_dish(&body(json!(1900))).unwrap();
        assert_eq!(fields.name, "Dolcelatte and chickpea spaghetti");
        assert_eq!(fields.price, 1900);
    }

    #[test]
    fn test_route_id_mismatch() {
        assert!(validate_route_id("abc", &json!({})).is_ok());
        assert!(validate_route_id("abc", &json!({ "id": "abc" })).is_ok());
        assert_eq!(
            message(validate_route_id("abc", &json!({ "id": "xyz" }))),
            "dishId abc does not match data.id xyz"
        );
    }
}
