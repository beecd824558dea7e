//! Ingredient Model

use crate::money::Hundredths;
use serde::{Deserialize, Serialize};

/// Ingredient entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    /// e.g. "kg", "liters", "pieces"
    pub unit: String,
    /// May go negative when orders outrun stock
    pub current_stock: Hundredths,
    pub alert_threshold: Hundredths,
    pub supplier: String,
}

impl Ingredient {
    pub fn is_low(&self) -> bool {
        self.current_stock < self.alert_threshold
    }
}

/// Create ingredient payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientCreate {
    pub name: String,
    pub unit: String,
    pub current_stock: Hundredths,
    pub alert_threshold: Hundredths,
    #[serde(default)]
    pub supplier: String,
}

/// `POST /api/inventory/{id}/restock` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRequest {
    pub quantity: Hundredths,
}
