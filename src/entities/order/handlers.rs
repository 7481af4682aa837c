//! Order HTTP handlers

use super::model::Order;
use super::validation::{create_status, validate_deletable, validate_order, validate_status};
use crate::core::{ApiError, DataService, Found, Payload, next_id};
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use std::sync::Arc;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: Arc<dyn DataService<Order>>,
}

impl FromRef<OrderAppState> for Arc<dyn DataService<Order>> {
    fn from_ref(state: &OrderAppState) -> Self {
        state.store.clone()
    }
}

/// GET /orders
///
/// Unlike the dish list, the order list takes no filter from the body.
pub async fn list_orders(State(state): State<OrderAppState>) -> Result<Json<Value>, ApiError> {
    let orders = state.store.list().await?;
    Ok(Json(json!({ "data": orders })))
}

/// GET /orders/{orderId}
pub async fn get_order(Found(order): Found<Order>) -> Json<Value> {
    Json(json!({ "data": order }))
}

/// POST /orders
pub async fn create_order(
    State(state): State<OrderAppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let data = payload.data();
    let fields = validate_order(data)?;
    let status = create_status(data);

    let order = Order {
        id: next_id(),
        deliver_to: fields.deliver_to,
        mobile_number: fields.mobile_number,
        status,
        dishes: fields.dishes,
    };

    let created = state.store.create(order).await?;
    tracing::info!(order_id = %created.id, status = %created.status, "order created");

    Ok((StatusCode::CREATED, Json(json!({ "data": created }))))
}

/// PUT /orders/{orderId}
pub async fn update_order(
    State(state): State<OrderAppState>,
    Found(existing): Found<Order>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let data = payload.data();
    let fields = validate_order(data)?;
    let status = validate_status(&existing.id, &existing, data)?;

    let order = Order {
        id: existing.id.clone(),
        deliver_to: fields.deliver_to,
        mobile_number: fields.mobile_number,
        status: status.to_string(),
        dishes: fields.dishes,
    };

    let updated = state.store.update(&existing.id, order).await?;
    if updated.status != existing.status {
        tracing::info!(
            order_id = %updated.id,
            from = %existing.status,
            to = %updated.status,
            "order status changed"
        );
    }

    Ok(Json(json!({ "data": updated })))
}

/// DELETE /orders/{orderId}
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Found(order): Found<Order>,
) -> Result<StatusCode, ApiError> {
    validate_deletable(&order)?;

    state
        .store
        .delete(&order.id)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| ApiError::not_found::<Order>(order.id.as_str()))
}
