//! Daily Sales Report Model

use crate::money::Hundredths;
use serde::{Deserialize, Serialize};

/// One row of the popular-items ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PopularItem {
    #[serde(rename = "menu_item__name")]
    pub name: String,
    pub total_quantity: i64,
}

/// `GET /api/reports/daily-sales` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    /// Business-day date, `YYYY-MM-DD`
    pub date: String,
    pub total_sales: Hundredths,
    pub popular_items: Vec<PopularItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySalesQuery {
    pub date: Option<String>,
}
