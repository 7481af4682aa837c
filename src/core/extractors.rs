//! Axum extractors for request bodies and guarded records
//!
//! - [`Payload`] reads the `{ "data": { ... } }` envelope, treating a
//!   missing body as `{}`
//! - [`Found`] is the record existence guard: it resolves the id from the
//!   path and loads the record before the handler runs

use crate::core::error::{ApiError, ValidationError};
use crate::core::{DataService, Entity};
use axum::body::Bytes;
use axum::extract::{FromRef, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

static ABSENT: Value = Value::Null;

/// JSON request body, kept untyped until validated
///
/// An empty body becomes an empty object. A non-empty body that is not
/// valid JSON is rejected with a 400.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl Payload {
    /// The `data` member of the envelope, or `null` when there is none
    pub fn data(&self) -> &Value {
        self.0.get("data").unwrap_or(&ABSENT)
    }

    /// A top-level member of the body (outside `data`)
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(ValidationError::InvalidJson {
                message: e.body_text(),
            }))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload(Value::Object(Map::new())));
        }

        let body = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::Validation(ValidationError::InvalidJson {
                message: e.to_string(),
            })
        })?;

        Ok(Payload(body))
    }
}

/// A record that exists in its collection
///
/// The id is read from the path parameter named by `T::path_param()` and
/// looked up in the `DataService<T>` held by the router state. A missing
/// record rejects the request with `"<Resource> id not found: <id>"`.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn get_dish(Found(dish): Found<Dish>) -> Json<Value> {
///     Json(json!({ "data": dish }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Found<T>(pub T);

impl<S, T> FromRequestParts<S> for Found<T>
where
    S: Send + Sync,
    T: Entity,
    Arc<dyn DataService<T>>: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;

        let id = params.get(T::path_param()).ok_or_else(|| {
            ApiError::Internal(format!(
                "route for {} has no {{{}}} parameter",
                T::resource_name(),
                T::path_param()
            ))
        })?;

        let store = <Arc<dyn DataService<T>> as FromRef<S>>::from_ref(state);
        store
            .get(id)
            .await?
            .map(Found)
            .ok_or_else(|| ApiError::not_found::<T>(id.as_str()))
    }
}
