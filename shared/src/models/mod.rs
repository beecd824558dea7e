//! Data models
//!
//! Shared between restaurant-server and its HTTP clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY); amounts are
//! [`Hundredths`](crate::money::Hundredths); timestamps are Unix millis
//! rendered as RFC 3339.

pub mod dining_table;
pub mod ingredient;
pub mod menu_item;
pub mod order;
pub mod report;
pub mod reservation;
pub mod staff;

// Re-exports
pub use dining_table::*;
pub use ingredient::*;
pub use menu_item::*;
pub use order::*;
pub use report::*;
pub use reservation::*;
pub use staff::*;
