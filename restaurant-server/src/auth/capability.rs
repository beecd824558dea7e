//! Capability Definitions
//!
//! Every mutating or sensitive endpoint names exactly one capability.
//! Any valid token carries the order-handling baseline; managers add catalog,
//! table and inventory management; admins hold everything.

use serde::{Deserialize, Serialize};
use shared::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    PlaceOrder,
    UpdateOrderStatus,
    ViewOrders,
    ManageCatalog,
    ManageTables,
    ManageInventory,
    ViewSalesReport,
    ManageStaff,
}

impl Capability {
    pub const ALL: [Capability; 8] = [
        Capability::PlaceOrder,
        Capability::UpdateOrderStatus,
        Capability::ViewOrders,
        Capability::ManageCatalog,
        Capability::ManageTables,
        Capability::ManageInventory,
        Capability::ViewSalesReport,
        Capability::ManageStaff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlaceOrder => "orders:place",
            Self::UpdateOrderStatus => "orders:update_status",
            Self::ViewOrders => "orders:view",
            Self::ManageCatalog => "menu:manage",
            Self::ManageTables => "tables:manage",
            Self::ManageInventory => "inventory:manage",
            Self::ViewSalesReport => "reports:view",
            Self::ManageStaff => "staff:manage",
        }
    }
}

/// Granted to every authenticated account, with or without a staff profile
const BASELINE: &[Capability] = &[
    Capability::PlaceOrder,
    Capability::UpdateOrderStatus,
    Capability::ViewOrders,
];

const MANAGER: &[Capability] = &[
    Capability::PlaceOrder,
    Capability::UpdateOrderStatus,
    Capability::ViewOrders,
    Capability::ManageCatalog,
    Capability::ManageTables,
    Capability::ManageInventory,
];

/// Capabilities held by a role; `None` is an account without a staff profile
pub fn capabilities_for(role: Option<Role>) -> &'static [Capability] {
    match role {
        Some(Role::Admin) => &Capability::ALL,
        Some(Role::Manager) => MANAGER,
        Some(Role::Waiter) | Some(Role::Chef) | None => BASELINE,
    }
}
