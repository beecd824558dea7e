//! Utility module
//!
//! - [`AppError`] / [`ApiResponse`] from `shared::error`
//! - logging setup, input validation, business time zone helpers

pub mod extract;
pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
