//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness and database check
//! - [`auth`] - token issuing and current user
//! - [`menu`] - menu items and recipes
//! - [`tables`] - dining tables and availability search
//! - [`reservations`] - reservation booking
//! - [`orders`] - order placement and status
//! - [`inventory`] - ingredients, low-stock and restocking
//! - [`reports`] - daily sales
//! - [`staff`] - staff provisioning
//!
//! Each module exposes `router()`; read-only catalog routes are public and
//! every mutation is gated by a single [`Capability`](crate::auth::Capability).

pub mod auth;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod reservations;
pub mod staff;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
