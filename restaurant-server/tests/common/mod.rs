//! Shared fixtures: a migrated on-disk database in a temp dir, the full
//! router, and seed helpers that go through the repositories.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use restaurant_server::core::build_app;
use restaurant_server::db::repository::{dining_table, ingredient, menu_item};
use restaurant_server::{Config, ServerState};
use serde_json::Value;
use shared::models::{
    Category, DiningTable, DiningTableCreate, Ingredient, IngredientCreate, MenuItem,
    MenuItemCreate, RecipeUpsert, Role, TableStatus,
};
use shared::money::Hundredths;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("restaurant.db");
        let mut config = Config::for_database(db_path.to_string_lossy().into_owned());
        adjust(&mut config);
        let state = ServerState::initialize(&config).await.unwrap();
        let app = build_app(state.clone());
        Self {
            app,
            state,
            _dir: dir,
        }
    }

    /// Mint a token without going through login
    pub fn token(&self, role: Option<Role>) -> String {
        self.state
            .get_jwt_service()
            .generate_token(1, "tester", role)
            .unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PATCH, uri, token, Some(body)).await
    }

    // ── Seeding ─────────────────────────────────────────────────────

    pub async fn menu_item(&self, name: &str, price_hundredths: i64, category: Category) -> MenuItem {
        menu_item::create(
            &self.state.pool,
            &MenuItemCreate {
                name: name.into(),
                description: String::new(),
                price: Hundredths::from_raw(price_hundredths),
                category,
                preparation_time: 10,
                is_available: true,
            },
        )
        .await
        .unwrap()
    }

    pub async fn ingredient(&self, name: &str, stock_hundredths: i64, threshold_hundredths: i64) -> Ingredient {
        ingredient::create(
            &self.state.pool,
            &IngredientCreate {
                name: name.into(),
                unit: "kg".into(),
                current_stock: Hundredths::from_raw(stock_hundredths),
                alert_threshold: Hundredths::from_raw(threshold_hundredths),
                supplier: String::new(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn recipe(&self, menu_item_id: i64, ingredient_id: i64, quantity_hundredths: i64) {
        menu_item::upsert_recipe(
            &self.state.pool,
            &RecipeUpsert {
                menu_item: menu_item_id,
                ingredient: ingredient_id,
                quantity_required: Hundredths::from_raw(quantity_hundredths),
            },
        )
        .await
        .unwrap();
    }

    pub async fn table(&self, number: &str, capacity: i64) -> DiningTable {
        dining_table::create(
            &self.state.pool,
            &DiningTableCreate {
                number: number.into(),
                capacity,
                status: TableStatus::Available,
                location: "Main hall".into(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn stock_of(&self, ingredient_id: i64) -> Hundredths {
        ingredient::find_by_id(&self.state.pool, ingredient_id)
            .await
            .unwrap()
            .unwrap()
            .current_stock
    }

    pub async fn order_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.state.pool)
            .await
            .unwrap()
    }
}
