//! Order Model

use crate::money::Hundredths;
use crate::util::rfc3339_millis;
use serde::{Deserialize, Serialize};

/// Order lifecycle status, stored and exchanged as its one-letter code
///
/// Forward path is `P -> C -> R -> S`; any status other than `X` may be
/// cancelled. Nothing leaves `X` or `S` except `S -> X`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "P")]
    #[cfg_attr(feature = "db", sqlx(rename = "P"))]
    Pending,
    #[serde(rename = "C")]
    #[cfg_attr(feature = "db", sqlx(rename = "C"))]
    Cooking,
    #[serde(rename = "R")]
    #[cfg_attr(feature = "db", sqlx(rename = "R"))]
    Ready,
    #[serde(rename = "S")]
    #[cfg_attr(feature = "db", sqlx(rename = "S"))]
    Served,
    #[serde(rename = "X")]
    #[cfg_attr(feature = "db", sqlx(rename = "X"))]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Cooking,
        Self::Ready,
        Self::Served,
        Self::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Pending => "P",
            Self::Cooking => "C",
            Self::Ready => "R",
            Self::Served => "S",
            Self::Cancelled => "X",
        }
    }

    /// Whether the order counts towards sales totals
    pub fn is_sale(&self) -> bool {
        matches!(self, Self::Ready | Self::Served)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        match (self, next) {
            (Pending, Cooking) | (Cooking, Ready) | (Ready, Served) => true,
            (Cancelled, _) => false,
            (_, Cancelled) => true,
            _ => false,
        }
    }
}

/// Order header row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    /// `None` for takeaway orders or when the table was deleted
    #[cfg_attr(feature = "db", sqlx(rename = "table_id"))]
    pub table: Option<i64>,
    pub status: OrderStatus,
    #[serde(with = "rfc3339_millis")]
    pub created_at: i64,
    #[serde(with = "rfc3339_millis")]
    pub updated_at: i64,
    pub total_price: Hundredths,
    pub is_takeaway: bool,
}

/// Order line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    #[cfg_attr(feature = "db", sqlx(rename = "menu_item_id"))]
    pub menu_item: i64,
    pub quantity: i64,
    pub special_requests: String,
}

/// Order with its lines, as returned by the order endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// One requested line of a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub special_requests: String,
}

/// `POST /api/orders` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(default)]
    pub table: Option<i64>,
    #[serde(default)]
    pub is_takeaway: bool,
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
}

/// `PATCH /api/orders/{id}/status` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

fn default_quantity() -> i64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    const ALL: [OrderStatus; 5] = [Pending, Cooking, Ready, Served, Cancelled];

    #[test]
    fn test_forward_path() {
        assert!(Pending.can_transition_to(Cooking));
        assert!(Cooking.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Served));
    }

    #[test]
    fn test_cancel_from_any_live_status() {
        for s in [Pending, Cooking, Ready, Served] {
            assert!(s.can_transition_to(Cancelled), "{s:?} -> X");
        }
        assert!(!Cancelled.can_transition_to(Cancelled));
    }

    #[test]
    fn test_rejected_transitions() {
        for s in ALL {
            assert!(!s.can_transition_to(s), "self-transition {s:?}");
            assert!(!Cancelled.can_transition_to(s));
        }
        assert!(!Served.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(Cooking));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(serde_json::to_string(&Cancelled).unwrap(), "\"X\"");
        let s: OrderStatus = serde_json::from_str("\"R\"").unwrap();
        assert_eq!(s, Ready);
        assert!(s.is_sale());
        assert!(!Pending.is_sale());
    }

    #[test]
    fn test_order_create_defaults() {
        let input: OrderCreate =
            serde_json::from_str(r#"{"items":[{"menu_item":4}]}"#).unwrap();
        assert!(input.table.is_none());
        assert!(!input.is_takeaway);
        assert_eq!(input.items[0].quantity, 1);
        assert_eq!(input.items[0].special_requests, "");
    }
}
