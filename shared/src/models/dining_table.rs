//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Table status, stored and exchanged as its two-letter code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum TableStatus {
    #[default]
    #[serde(rename = "AV")]
    #[cfg_attr(feature = "db", sqlx(rename = "AV"))]
    Available,
    #[serde(rename = "OC")]
    #[cfg_attr(feature = "db", sqlx(rename = "OC"))]
    Occupied,
    #[serde(rename = "RS")]
    #[cfg_attr(feature = "db", sqlx(rename = "RS"))]
    Reserved,
    #[serde(rename = "MA")]
    #[cfg_attr(feature = "db", sqlx(rename = "MA"))]
    Maintenance,
}

impl TableStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Available => "AV",
            Self::Occupied => "OC",
            Self::Reserved => "RS",
            Self::Maintenance => "MA",
        }
    }
}

/// Dining table entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    /// Display number, unique, at most 4 characters
    pub number: String,
    pub capacity: i64,
    pub status: TableStatus,
    /// Free-form label such as "Window" or "Patio"
    pub location: String,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub number: String,
    pub capacity: i64,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub location: String,
}

/// `PUT /api/tables/{id}/status` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub status: TableStatus,
}

/// Availability query: seats needed and the wanted start time
/// (`YYYY-MM-DDTHH:MM`, business time zone)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub party_size: i64,
    pub start_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available_tables: Vec<DiningTable>,
}
