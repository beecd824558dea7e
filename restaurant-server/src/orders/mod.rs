//! Order placement and lifecycle
//!
//! - **processor**: validates a new order and writes it, its lines, its
//!   total and the ingredient decrements in one transaction
//! - **status**: the `P -> C -> R -> S` / cancel state machine
//!
//! # Data Flow
//!
//! ```text
//! OrderCreate → validate_order → BEGIN
//!     INSERT orders (table check)      ← first statement takes the write lock
//!     INSERT order_items per line      ← unknown menu item rolls back
//!     UPDATE orders.total_price        ← Σ price × quantity, computed in SQL
//!     UPDATE ingredients.current_stock ← relative decrement through recipes
//! COMMIT → OrderDetail
//! ```

pub mod processor;
pub mod status;

pub use processor::{place_order, validate_order};
pub use status::{allowed_sources, update_status};
