//! End-to-end HTTP flows through the full router

mod common;

use common::TestApp;
use http::StatusCode;
use restaurant_server::db::repository::staff;
use serde_json::json;
use shared::models::{Category, Role};

#[tokio::test]
async fn test_order_total_and_stock_decrement() {
    let app = TestApp::new().await;
    let burger = app.menu_item("Burger", 1250, Category::MainCourse).await;
    let soda = app.menu_item("Soda", 400, Category::Beverage).await;
    let beef = app.ingredient("Beef", 1000, 200).await;
    app.recipe(burger.id, beef.id, 200).await;
    let table = app.table("T1", 4).await;
    let token = app.token(Some(Role::Waiter));

    let (status, body) = app
        .post(
            "/api/orders",
            Some(&token),
            json!({
                "table": table.id,
                "is_takeaway": false,
                "items": [
                    {"menu_item": burger.id, "quantity": 3, "special_requests": "no onions"},
                    {"menu_item": soda.id, "quantity": 2}
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["total_price"], "45.50");
    assert_eq!(body["status"], "P");
    assert_eq!(body["table"], table.id);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["special_requests"], "no onions");

    // 10.00 - 2.00 x 3
    assert_eq!(app.stock_of(beef.id).await.raw(), 400);

    let order_id = body["id"].as_i64().unwrap();
    let (status, fetched) = app.get(&format!("/api/orders/{order_id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["total_price"], "45.50");
}

#[tokio::test]
async fn test_takeaway_order_without_table() {
    let app = TestApp::new().await;
    let fries = app.menu_item("Fries", 350, Category::Appetizer).await;
    let token = app.token(None);

    let (status, body) = app
        .post(
            "/api/orders",
            Some(&token),
            json!({"is_takeaway": true, "items": [{"menu_item": fries.id}]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert!(body["table"].is_null());
    assert_eq!(body["is_takeaway"], true);
    assert_eq!(body["items"][0]["quantity"], 1);
    assert_eq!(body["total_price"], "3.50");
}

#[tokio::test]
async fn test_order_validation_errors() {
    let app = TestApp::new().await;
    let soup = app.menu_item("Soup", 600, Category::Appetizer).await;
    let token = app.token(Some(Role::Waiter));

    let (status, body) = app
        .post("/api/orders", Some(&token), json!({"items": []}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4007);

    let (status, body) = app
        .post(
            "/api/orders",
            Some(&token),
            json!({"items": [{"menu_item": soup.id, "quantity": 0}]}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["fields"]["items[0].quantity"].is_string());

    let (status, body) = app
        .post(
            "/api/orders",
            Some(&token),
            json!({"table": 999, "items": [{"menu_item": soup.id}]}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);
    assert_eq!(app.order_count().await, 0);
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let app = TestApp::new().await;
    let token = app.token(Some(Role::Waiter));

    let (status, body) = app
        .post("/api/orders", Some(&token), json!({"items": "lots"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_status_machine_over_http() {
    let app = TestApp::new().await;
    let pie = app.menu_item("Pie", 500, Category::Dessert).await;
    let token = app.token(Some(Role::Chef));

    let (_, order) = app
        .post("/api/orders", Some(&token), json!({"items": [{"menu_item": pie.id}]}))
        .await;
    let uri = format!("/api/orders/{}/status", order["id"]);

    // P -> R skips Cooking
    let (status, body) = app.patch(&uri, Some(&token), json!({"status": "R"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4010);

    for next in ["C", "R", "S"] {
        let (status, body) = app.patch(&uri, Some(&token), json!({"status": next})).await;
        assert_eq!(status, StatusCode::OK, "{next}: {body}");
        assert_eq!(body["status"], next);
    }

    // PUT behaves like PATCH
    let (status, body) = app
        .send(http::Method::PUT, &uri, Some(&token), Some(json!({"status": "X"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "X");

    let (status, _) = app.patch(&uri, Some(&token), json!({"status": "X"})).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .patch("/api/orders/4242/status", Some(&token), json!({"status": "C"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_capability_gating() {
    let app = TestApp::new().await;

    // Public reads need no token
    let (status, _) = app.get("/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/api/inventory/low-stock", None).await;
    assert_eq!(status, StatusCode::OK);

    // Mutations do
    let (status, body) = app.post("/api/orders", None, json!({"items": []})).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, _) = app.get("/api/reports/daily-sales", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let waiter = app.token(Some(Role::Waiter));
    let (status, body) = app.get("/api/reports/daily-sales", Some(&waiter)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2001);

    let manager = app.token(Some(Role::Manager));
    let (status, _) = app.get("/api/reports/daily-sales", Some(&manager)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .post(
            "/api/menu",
            Some(&manager),
            json!({"name": "Salad", "price": "7.25", "category": "APP", "preparation_time": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app
        .post(
            "/api/menu",
            Some(&waiter),
            json!({"name": "Cake", "price": "4.00", "category": "DES", "preparation_time": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = app.token(Some(Role::Admin));
    let (status, _) = app.get("/api/reports/daily-sales", Some(&admin)).await;
    assert_eq!(status, StatusCode::OK);

    // A bad token is rejected even on a public route
    let (status, body) = app.get("/api/menu", Some("not.a.jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1004);
}

#[tokio::test]
async fn test_login_and_me() {
    let app = TestApp::new().await;
    staff::bootstrap_admin(&app.state.pool, "boss", "correct-horse")
        .await
        .unwrap();
    // Second bootstrap leaves the account alone
    staff::bootstrap_admin(&app.state.pool, "boss", "other-password")
        .await
        .unwrap();

    let (status, body) = app
        .post(
            "/api/auth/token",
            None,
            json!({"username": "boss", "password": "wrong"}),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);

    let (status, body) = app
        .post(
            "/api/auth/token",
            None,
            json!({"username": "boss", "password": "correct-horse"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["role"], "ADMIN");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, me) = app.get("/api/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "boss");
    assert_eq!(me["user_id"], body["user_id"]);
    let caps = me["capabilities"].as_array().unwrap();
    assert!(caps.iter().any(|c| c == "reports:view"));

    let (status, _) = app.get("/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_staff_provisioning() {
    let app = TestApp::new().await;
    let admin = app.token(Some(Role::Admin));

    let (status, body) = app
        .post(
            "/api/staff",
            Some(&admin),
            json!({"username": "wendy", "password": "waiter-pass", "role": "WAITER", "pin_code": "12a4"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8003);

    let (status, body) = app
        .post(
            "/api/staff",
            Some(&admin),
            json!({"username": "wendy", "password": "waiter-pass", "role": "WAITER", "pin_code": "1234"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["role"], "WAITER");
    assert!(body.get("pin_code").is_none());

    let (status, body) = app
        .post(
            "/api/staff",
            Some(&admin),
            json!({"username": "wendy", "password": "another-pass", "role": "CHEF", "pin_code": "9999"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 8002);

    let (status, login) = app
        .post(
            "/api/auth/token",
            None,
            json!({"username": "wendy", "password": "waiter-pass"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["role"], "WAITER");

    let manager = app.token(Some(Role::Manager));
    let (status, _) = app
        .post(
            "/api/staff",
            Some(&manager),
            json!({"username": "mallory", "password": "manager-pass", "role": "ADMIN", "pin_code": "0000"}),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_menu_management() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));

    let (status, body) = app
        .post(
            "/api/menu",
            Some(&manager),
            json!({"name": "Steak", "price": "21.999", "category": "MAIN", "preparation_time": 20}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    let (_, steak) = app
        .post(
            "/api/menu",
            Some(&manager),
            json!({"name": "Steak", "price": "22.00", "category": "MAIN", "preparation_time": 20}),
        )
        .await;
    let (_, tea) = app
        .post(
            "/api/menu",
            Some(&manager),
            json!({"name": "Tea", "price": 2.5, "category": "BEV", "preparation_time": 2}),
        )
        .await;
    assert_eq!(tea["price"], "2.50");

    let (status, mains) = app.get("/api/menu?category=MAIN", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mains.as_array().unwrap().len(), 1);
    assert_eq!(mains[0]["name"], "Steak");

    let (status, _) = app.get("/api/menu?category=SNACK", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Disabled items drop out of the public list
    let (status, updated) = app
        .send(
            http::Method::PUT,
            &format!("/api/menu/{}", steak["id"]),
            Some(&manager),
            Some(json!({"is_available": false})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["is_available"], false);
    assert_eq!(updated["price"], "22.00");
    let (_, all) = app.get("/api/menu", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (_, ingredient) = app
        .post(
            "/api/inventory",
            Some(&manager),
            json!({"name": "Tea leaves", "unit": "kg", "current_stock": "3", "alert_threshold": "0.5"}),
        )
        .await;
    let (status, recipe) = app
        .post(
            "/api/recipes",
            Some(&manager),
            json!({"menu_item": tea["id"], "ingredient": ingredient["id"], "quantity_required": "0.01"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{recipe}");
    let (_, rows) = app
        .get(&format!("/api/menu/{}/recipe", tea["id"]), Some(&manager))
        .await;
    assert_eq!(rows[0]["quantity_required"], "0.01");
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;
    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_restock_adds_to_current_level() {
    let app = TestApp::new().await;
    let manager = app.token(Some(Role::Manager));
    let butter = app.ingredient("Butter", 150, 200).await;

    let uri = format!("/api/inventory/{}/restock", butter.id);
    let (status, body) = app.post(&uri, Some(&manager), json!({"quantity": "2.25"})).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["current_stock"], "3.75");
    assert_eq!(app.stock_of(butter.id).await.raw(), 375);

    let (status, body) = app.post(&uri, Some(&manager), json!({"quantity": "0"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "quantity");

    let (status, body) = app
        .post("/api/inventory/9999/restock", Some(&manager), json!({"quantity": "1"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);

    let waiter = app.token(Some(Role::Waiter));
    let (status, _) = app.post(&uri, Some(&waiter), json!({"quantity": "1"})).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
