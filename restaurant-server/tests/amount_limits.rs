//! Amount caps on prices, recipe quantities, stock and order totals

mod common;

use common::TestApp;
use http::{Method, StatusCode};
use serde_json::json;
use shared::models::{Category, Role};

#[tokio::test]
async fn test_menu_price_cap() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));

    for price in ["10000.00", "-1.00", "50000000000000000.00"] {
        let (status, body) = app
            .post(
                "/api/menu",
                Some(&manager),
                json!({"name": "Caviar", "price": price, "category": "APP", "preparation_time": 5}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}: {body}");
        assert_eq!(body["code"], 3002);
        assert_eq!(body["details"]["field"], "price");
    }

    let (status, item) = app
        .post(
            "/api/menu",
            Some(&manager),
            json!({"name": "Caviar", "price": "9999.99", "category": "APP", "preparation_time": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{item}");
    assert_eq!(item["price"], "9999.99");

    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/api/menu/{}", item["id"]),
            Some(&manager),
            Some(json!({"price": "10000.00"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn test_recipe_quantity_cap() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));
    let soup = app.menu_item("Soup", 600, Category::Appetizer).await;
    let salt = app.ingredient("Salt", 1_000, 100).await;

    let (status, body) = app
        .post(
            "/api/recipes",
            Some(&manager),
            json!({"menu_item": soup.id, "ingredient": salt.id, "quantity_required": "10000.00"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3101);
    assert_eq!(body["details"]["field"], "quantity_required");
}

#[tokio::test]
async fn test_ingredient_levels_cap() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));

    let (status, body) = app
        .post(
            "/api/inventory",
            Some(&manager),
            json!({
                "name": "Rice",
                "unit": "kg",
                "current_stock": "92233720368547758.00",
                "alert_threshold": "1000000.00"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    let fields = body["details"]["fields"].as_object().unwrap();
    assert!(fields.contains_key("current_stock"));
    assert!(fields.contains_key("alert_threshold"));
}

#[tokio::test]
async fn test_restock_overflow_is_rejected_and_listing_survives() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));
    let rice = app.ingredient("Rice", 99_999_950, 100).await;
    let uri = format!("/api/inventory/{}/restock", rice.id);

    let (status, body) = app.post(&uri, Some(&manager), json!({"quantity": "1.00"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "quantity");

    let (status, _) = app
        .post(&uri, Some(&manager), json!({"quantity": "92233720368547758.00"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, rows) = app.get("/api/inventory", None).await;
    assert_eq!(status, StatusCode::OK, "{rows}");
    assert_eq!(rows[0]["current_stock"], "999999.50");
    assert_eq!(app.stock_of(rice.id).await.raw(), 99_999_950);
}

#[tokio::test]
async fn test_order_total_cap_rolls_back() {
    let app = TestApp::new().await;
    let waiter = app.token(Some(Role::Waiter));
    let truffle = app.menu_item("Truffle", 999_999, Category::MainCourse).await;

    // 101 x 9999.99 = 1009998.99
    let (status, body) = app
        .post(
            "/api/orders",
            Some(&waiter),
            json!({"is_takeaway": true, "items": [{"menu_item": truffle.id, "quantity": 101}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "items");
    assert_eq!(app.order_count().await, 0);

    let (status, body) = app
        .post(
            "/api/orders",
            Some(&waiter),
            json!({"is_takeaway": true, "items": [{"menu_item": truffle.id, "quantity": 100}]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["total_price"], "999999.00");
}
