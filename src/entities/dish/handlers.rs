//! Dish HTTP handlers

use super::model::Dish;
use super::validation::{validate_dish, validate_route_id};
use crate::core::validation::{display_value, is_truthy};
use crate::core::{ApiError, DataService, Found, Payload, next_id};
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: Arc<dyn DataService<Dish>>,
}

impl FromRef<DishAppState> for Arc<dyn DataService<Dish>> {
    fn from_ref(state: &DishAppState) -> Self {
        state.store.clone()
    }
}

/// GET /dishes
///
/// A top-level `dishId` in the request body narrows the list to that dish.
pub async fn list_dishes(
    State(state): State<DishAppState>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let mut dishes = state.store.list().await?;

    if let Some(dish_id) = payload.field("dishId").filter(|v| is_truthy(Some(*v))) {
        let dish_id = display_value(dish_id);
        dishes.retain(|dish| dish.id == dish_id);
    }

    Ok(Json(json!({ "data": dishes })))
}

/// GET /dishes/{dishId}
pub async fn get_dish(Found(dish): Found<Dish>) -> Json<Value> {
    Json(json!({ "data": dish }))
}

/// POST /dishes
pub async fn create_dish(
    State(state): State<DishAppState>,
    payload: Payload,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let fields = validate_dish(payload.data())?;

    let dish = Dish {
        id: next_id(),
        name: fields.name,
        description: fields.description,
        image_url: fields.image_url,
        price: fields.price,
    };

    let created = state.store.create(dish).await?;
    tracing::info!(dish_id = %created.id, "dish created");

    Ok((StatusCode::CREATED, Json(json!({ "data": created }))))
}

/// PUT /dishes/{dishId}
pub async fn update_dish(
    State(state): State<DishAppState>,
    Found(existing): Found<Dish>,
    payload: Payload,
) -> Result<Json<Value>, ApiError> {
    let data = payload.data();
    let fields = validate_dish(data)?;
    validate_route_id(&existing.id, data)?;

    let dish = Dish {
        id: existing.id.clone(),
        name: fields.name,
        description: fields.description,
        image_url: fields.image_url,
        price: fields.price,
    };

    let updated = state.store.update(&existing.id, dish).await?;

    Ok(Json(json!({ "data": updated })))
}
