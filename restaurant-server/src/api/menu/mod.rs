//! Menu API
//!
//! | Path | Method | Capability |
//! |------|--------|------------|
//! | /api/menu | GET | public |
//! | /api/menu | POST | ManageCatalog |
//! | /api/menu/{id} | PUT | ManageCatalog |
//! | /api/menu/{id}/recipe | GET | ManageCatalog |
//! | /api/recipes | POST | ManageCatalog |

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::{Capability, require_capability};
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let public_routes = Router::new().route("/api/menu", get(handler::list));

    let manage_routes = Router::new()
        .route("/api/menu", post(handler::create))
        .route("/api/menu/{id}", put(handler::update))
        .route("/api/menu/{id}/recipe", get(handler::recipe))
        .route("/api/recipes", post(handler::upsert_recipe))
        .layer(middleware::from_fn(require_capability(
            Capability::ManageCatalog,
        )));

    public_routes.merge(manage_routes)
}
