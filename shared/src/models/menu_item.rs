//! Menu Item Model

use crate::money::Hundredths;
use serde::{Deserialize, Serialize};

/// Menu category, stored and exchanged as its short code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum Category {
    #[serde(rename = "APP")]
    #[cfg_attr(feature = "db", sqlx(rename = "APP"))]
    Appetizer,
    #[serde(rename = "MAIN")]
    #[cfg_attr(feature = "db", sqlx(rename = "MAIN"))]
    MainCourse,
    #[serde(rename = "DES")]
    #[cfg_attr(feature = "db", sqlx(rename = "DES"))]
    Dessert,
    #[serde(rename = "BEV")]
    #[cfg_attr(feature = "db", sqlx(rename = "BEV"))]
    Beverage,
}

impl Category {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Appetizer => "APP",
            Self::MainCourse => "MAIN",
            Self::Dessert => "DES",
            Self::Beverage => "BEV",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Appetizer => "Appetizer",
            Self::MainCourse => "Main Course",
            Self::Dessert => "Dessert",
            Self::Beverage => "Beverage",
        }
    }
}

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Hundredths,
    pub category: Category,
    /// Minutes
    pub preparation_time: i64,
    pub is_available: bool,
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Hundredths,
    pub category: Category,
    pub preparation_time: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Hundredths>,
    pub category: Option<Category>,
    pub preparation_time: Option<i64>,
    pub is_available: Option<bool>,
}

/// `GET /api/menu` filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    pub category: Option<Category>,
}

/// Recipe row: how much of an ingredient one portion of a menu item consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Recipe {
    pub id: i64,
    #[cfg_attr(feature = "db", sqlx(rename = "menu_item_id"))]
    pub menu_item: i64,
    #[cfg_attr(feature = "db", sqlx(rename = "ingredient_id"))]
    pub ingredient: i64,
    pub quantity_required: Hundredths,
}

/// Create or replace the recipe row for a (menu item, ingredient) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeUpsert {
    pub menu_item: i64,
    pub ingredient: i64,
    pub quantity_required: Hundredths,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_codes() {
        assert_eq!(
            serde_json::to_string(&Category::MainCourse).unwrap(),
            "\"MAIN\""
        );
        let c: Category = serde_json::from_str("\"BEV\"").unwrap();
        assert_eq!(c, Category::Beverage);
        assert_eq!(c.label(), "Beverage");
        assert!(serde_json::from_str::<Category>("\"Beverage\"").is_err());
    }

    #[test]
    fn test_menu_item_create_defaults() {
        let input: MenuItemCreate = serde_json::from_str(
            r#"{"name":"Soup","price":"6.50","category":"APP","preparation_time":10}"#,
        )
        .unwrap();
        assert!(input.is_available);
        assert_eq!(input.description, "");
        assert_eq!(input.price.raw(), 650);
    }
}
