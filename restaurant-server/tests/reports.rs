//! Daily sales report

mod common;

use common::TestApp;
use http::StatusCode;
use restaurant_server::orders::place_order;
use shared::models::{Category, OrderCreate, OrderItemInput, Role};

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

async fn order(app: &TestApp, lines: &[(i64, i64)], status: &str) -> i64 {
    let items = lines
        .iter()
        .map(|&(menu_item, quantity)| OrderItemInput {
            menu_item,
            quantity,
            special_requests: String::new(),
        })
        .collect();
    let detail = place_order(
        &app.state.pool,
        &OrderCreate {
            table: None,
            is_takeaway: true,
            items,
        },
    )
    .await
    .unwrap();
    sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(detail.order.id)
        .execute(&app.state.pool)
        .await
        .unwrap();
    detail.order.id
}

#[tokio::test]
async fn test_daily_sales_totals_and_popular_items() {
    let app = TestApp::new().await;
    let pizza = app.menu_item("Pizza", 2_000, Category::MainCourse).await;
    let pasta = app.menu_item("Pasta", 1_550, Category::MainCourse).await;
    let wine = app.menu_item("Wine", 999, Category::Beverage).await;
    let lobster = app.menu_item("Lobster", 10_000, Category::MainCourse).await;
    let bread = app.menu_item("Bread", 200, Category::Appetizer).await;
    let soup = app.menu_item("Soup", 600, Category::Appetizer).await;
    let steak = app.menu_item("Steak", 5_000, Category::MainCourse).await;

    let first = order(&app, &[(pizza.id, 1)], "S").await;
    order(&app, &[(pasta.id, 1)], "S").await;
    order(&app, &[(wine.id, 1)], "R").await;
    order(&app, &[(lobster.id, 1)], "X").await;
    // Pending: counts towards popularity, not sales
    order(&app, &[(wine.id, 3), (bread.id, 1), (soup.id, 1)], "P").await;
    // Served yesterday: excluded from both
    let old = order(&app, &[(steak.id, 9)], "S").await;
    sqlx::query("UPDATE orders SET created_at = created_at - ? WHERE id = ?")
        .bind(DAY_MILLIS)
        .bind(old)
        .execute(&app.state.pool)
        .await
        .unwrap();

    let admin = app.token(Some(Role::Admin));
    let (_, first_order) = app.get(&format!("/api/orders/{first}"), Some(&admin)).await;
    let date = first_order["created_at"].as_str().unwrap()[..10].to_string();

    let (status, body) = app
        .get(&format!("/api/reports/daily-sales?date={date}"), Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["date"], date);
    assert_eq!(body["total_sales"], "45.49");

    let popular = body["popular_items"].as_array().unwrap();
    let ranking: Vec<(&str, i64)> = popular
        .iter()
        .map(|p| {
            (
                p["menu_item__name"].as_str().unwrap(),
                p["total_quantity"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        ranking,
        vec![
            ("Wine", 4),
            ("Bread", 1),
            ("Lobster", 1),
            ("Pasta", 1),
            ("Pizza", 1),
        ]
    );
}

#[tokio::test]
async fn test_empty_day_and_bad_date() {
    let app = TestApp::new().await;
    let admin = app.token(Some(Role::Admin));

    let (status, body) = app
        .get("/api/reports/daily-sales?date=2001-01-01", Some(&admin))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_sales"], "0.00");
    assert!(body["popular_items"].as_array().unwrap().is_empty());

    let (status, body) = app
        .get("/api/reports/daily-sales?date=01-01-2001", Some(&admin))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
}
