//! HTTP tests for the /orders resource

mod common;

use axum::http::StatusCode;
use common::*;
use grubdash::prelude::*;
use serde_json::{Value, json};

const OUT_FOR_DELIVERY: &str = "f6069a542257054114138301947672ba";
const DELIVERED: &str = "5a887d326e83d3c5bdcbee398ea32aff";

async fn create(app: &TestApp, data: Value) -> Value {
    let response = app.server.post("/orders").json(&envelope(data)).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

// === Create ===

#[tokio::test]
async fn test_create_order() {
    let app = make_app();

    let order = create(&app, order_data()).await;
    assert_eq!(order["status"], "pending");
    assert_eq!(order["deliverTo"], "1600 Pennsylvania Avenue NW, Washington, DC 20500");
    assert_eq!(order["dishes"][0]["quantity"], 2);
    assert_eq!(order["dishes"][0]["name"], "Falafel and tahini bagel");

    let id = order["id"].as_str().unwrap();
    let fetched: Value = app.server.get(&format!("/orders/{}", id)).await.json();
    assert_eq!(fetched["data"], order);
}

#[tokio::test]
async fn test_create_order_defaults_status_to_pending() {
    let app = make_app();

    let mut data = order_data();
    data.as_object_mut().unwrap().remove("status");

    let order = create(&app, data).await;
    assert_eq!(order["status"], "pending");
}

#[tokio::test]
async fn test_create_order_stores_status_as_sent() {
    let app = make_app();

    let mut data = order_data();
    data["status"] = json!("new");

    let order = create(&app, data).await;
    assert_eq!(order["status"], "new");

    let id = order["id"].as_str().unwrap();
    let fetched: Value = app.server.get(&format!("/orders/{}", id)).await.json();
    assert_eq!(fetched["data"]["status"], "new");
}

#[tokio::test]
async fn test_create_order_missing_fields() {
    let app = make_app();

    for field in ["deliverTo", "mobileNumber"] {
        let mut data = order_data();
        data[field] = json!("");

        let response = app.server.post("/orders").json(&envelope(data)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(&response.json::<Value>()),
            format!("Order must include a {}", field)
        );
    }
}

#[tokio::test]
async fn test_create_order_dish_rules() {
    let app = make_app();

    let cases = [
        (json!(null), "Order must include a dish."),
        (json!([]), "Order must include one dish"),
        (json!("pasta"), "Order must include one dish"),
        (
            json!([{ "id": "abc", "quantity": 0 }]),
            "Dish abc must have a quantity greater than 0.",
        ),
        (
            json!([{ "id": "abc", "quantity": 1 }, { "id": "def", "quantity": "2" }]),
            "Dish def must have a quantity greater than 0.",
        ),
        (
            json!([{ "quantity": 1.5 }]),
            "Dish #1 must have a quantity greater than 0.",
        ),
    ];

    for (dishes, expected) in cases {
        let mut data = order_data();
        data["dishes"] = dishes;

        let response = app.server.post("/orders").json(&envelope(data)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(error_message(&response.json::<Value>()), expected);
    }

    let listed: Value = app.server.get("/orders").await.json();
    assert_eq!(listed["data"], json!([]));
}

// === Read ===

#[tokio::test]
async fn test_list_orders_ignores_body_filter() {
    let app = make_seeded_app().await;

    let body: Value = app
        .server
        .get("/orders")
        .json(&json!({ "orderId": OUT_FOR_DELIVERY }))
        .await
        .json();

    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_unknown_order() {
    let app = make_seeded_app().await;

    let response = app.server.get("/orders/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Order id not found: nope"
    );
}

// === Update ===

#[tokio::test]
async fn test_update_order_status() {
    let app = make_seeded_app().await;

    let mut data = order_data();
    data["id"] = json!(OUT_FOR_DELIVERY);
    data["status"] = json!("preparing");

    let response = app
        .server
        .put(&format!("/orders/{}", OUT_FOR_DELIVERY))
        .json(&envelope(data))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["status"], "preparing");

    let fetched: Value = app
        .server
        .get(&format!("/orders/{}", OUT_FOR_DELIVERY))
        .await
        .json();
    assert_eq!(fetched["data"]["status"], "preparing");
    assert_eq!(fetched["data"]["id"], OUT_FOR_DELIVERY);
}

#[tokio::test]
async fn test_update_order_id_mismatch() {
    let app = make_seeded_app().await;

    let mut data = order_data();
    data["id"] = json!("someone-else");

    let response = app
        .server
        .put(&format!("/orders/{}", OUT_FOR_DELIVERY))
        .json(&envelope(data))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = error_message(&response.json::<Value>()).to_string();
    assert!(message.contains("someone-else"));
    assert!(message.contains(OUT_FOR_DELIVERY));
}

#[tokio::test]
async fn test_update_order_rejects_invalid_status() {
    let app = make_seeded_app().await;

    for status in [json!(null), json!("delivered"), json!("shipped")] {
        let mut data = order_data();
        data["status"] = status;

        let response = app
            .server
            .put(&format!("/orders/{}", OUT_FOR_DELIVERY))
            .json(&envelope(data))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            error_message(&response.json::<Value>()),
            "Order must have a status of pending, preparing, out-for-delivery, or delivered"
        );
    }
}

#[tokio::test]
async fn test_delivered_order_cannot_be_changed() {
    let app = make_seeded_app().await;

    let mut data = order_data();
    data["status"] = json!("pending");

    let response = app
        .server
        .put(&format!("/orders/{}", DELIVERED))
        .json(&envelope(data))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response.json::<Value>()),
        "A delivered order cannot be changed"
    );

    let fetched: Value = app.server.get(&format!("/orders/{}", DELIVERED)).await.json();
    assert_eq!(fetched["data"]["status"], "delivered");
}

#[tokio::test]
async fn test_update_validates_dishes_before_status() {
    let app = make_seeded_app().await;

    let mut data = order_data();
    data["dishes"] = json!([]);
    data["status"] = json!("bogus");

    let response = app
        .server
        .put(&format!("/orders/{}", OUT_FOR_DELIVERY))
        .json(&envelope(data))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Order must include one dish"
    );
}

// === Delete ===

#[tokio::test]
async fn test_delete_pending_order() {
    let app = make_app();
    insert_order(&app, "pending-order", OrderStatus::Pending).await;

    let response = app.server.delete("/orders/pending-order").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    app.server
        .get("/orders/pending-order")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_non_pending_order() {
    let app = make_app();
    insert_order(&app, "busy-order", OrderStatus::Preparing).await;

    let response = app.server.delete("/orders/busy-order").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Cannot delete order busy-order, as it is no longer pending."
    );

    app.server.get("/orders/busy-order").await.assert_status_ok();
}

#[tokio::test]
async fn test_delete_unknown_order() {
    let app = make_app();

    let response = app.server.delete("/orders/ghost").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&response.json::<Value>()),
        "Order id not found: ghost"
    );
}
