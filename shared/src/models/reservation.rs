//! Reservation Model

use crate::util::rfc3339_millis;
use serde::{Deserialize, Serialize};

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    #[cfg_attr(feature = "db", sqlx(rename = "table_id"))]
    pub table: i64,
    pub party_size: i64,
    #[serde(with = "rfc3339_millis")]
    pub reservation_time: i64,
    #[serde(with = "rfc3339_millis")]
    pub created_at: i64,
    pub special_requests: String,
}

/// Create reservation payload
///
/// Every field except `special_requests` is optional at the serde level so
/// that missing fields surface as field-level validation errors instead of a
/// bare JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationCreate {
    pub customer_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub table: Option<i64>,
    pub party_size: Option<i64>,
    /// `YYYY-MM-DDTHH:MM` in the business time zone
    pub reservation_time: Option<String>,
    #[serde(default)]
    pub special_requests: String,
}
