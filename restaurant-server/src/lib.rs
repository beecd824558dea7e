//! Restaurant Server - menu, table, reservation, order and inventory backend
//!
//! # Module layout
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # config, state, HTTP server
//! ├── auth/          # JWT, capabilities, middleware, extractor
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── orders/        # transactional order placement, status machine
//! ├── reservations/  # reservation booking
//! ├── api/           # HTTP routers and handlers
//! └── utils/         # logging, validation, time helpers
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod reservations;
pub mod utils;

// Re-export public types
pub use auth::{Capability, CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger setup
pub use utils::logger::init_logger;

// Security logging macro - auth failures go to the `security` target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
