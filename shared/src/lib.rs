//! Shared types for the restaurant backend
//!
//! Wire models, the unified error system and fixed-point money helpers used by
//! `restaurant-server` and its HTTP clients.

pub mod error;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
