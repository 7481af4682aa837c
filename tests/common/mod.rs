//! Shared test harness for HTTP-level tests
//!
//! Every test gets its own server over fresh in-memory stores, so no state
//! leaks between tests.
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

/// A running test server plus direct access to its stores
pub struct TestApp {
    pub server: TestServer,
    pub module: RestaurantModule,
}

/// Server over empty stores
pub fn make_app() -> TestApp {
    let module = RestaurantModule::in_memory();
    let router = ServerBuilder::new()
        .register_module(module.clone())
        .build()
        .unwrap();

    TestApp {
        server: TestServer::new(router),
        module,
    }
}

/// Server over the bundled fixtures
pub async fn make_seeded_app() -> TestApp {
    let app = make_app();
    SeedData::bundled()
        .unwrap()
        .apply(app.module.dishes.as_ref(), app.module.orders.as_ref())
        .await
        .unwrap();
    app
}

/// Store an order directly, bypassing the API
pub async fn insert_order(app: &TestApp, id: &str, status: OrderStatus) -> Order {
    let order: Order = serde_json::from_value(json!({
        "id": id,
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "status": status,
        "dishes": [{ "id": "d351db2b49b69679504652ea1cf38241", "quantity": 2 }]
    }))
    .unwrap();
    app.module.orders.create(order).await.unwrap()
}

/// A valid dish body
pub fn dish_data() -> Value {
    json!({
        "name": "Broccoli and beetroot stir fry",
        "description": "Crunchy stir fry featuring fresh broccoli and beetroot",
        "image_url": "https://images.example.com/stir-fry.jpg",
        "price": 1500
    })
}

/// A valid order body
pub fn order_data() -> Value {
    json!({
        "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
        "mobileNumber": "(202) 456-1111",
        "status": "pending",
        "dishes": [
            { "id": "90c3d873684bf381dfab29034b5bba73", "name": "Falafel and tahini bagel", "price": 600, "quantity": 2 }
        ]
    })
}

/// Wrap fields in the request envelope
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// The `error` message of an error response
pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
