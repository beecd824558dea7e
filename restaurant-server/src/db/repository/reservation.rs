//! Reservation Repository

use shared::models::Reservation;
use sqlx::{Executor, Sqlite};

use super::RepoResult;

/// Validated reservation ready to persist
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub customer_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub table_id: i64,
    pub party_size: i64,
    /// Unix millis
    pub reservation_time: i64,
    pub special_requests: String,
}

pub async fn insert<'c, E>(executor: E, data: &NewReservation, now: i64) -> RepoResult<Reservation>
where
    E: Executor<'c, Database = Sqlite>,
{
    let reservation = sqlx::query_as::<_, Reservation>(
        r#"
        INSERT INTO reservations (
            customer_name, contact_phone, contact_email, table_id,
            party_size, reservation_time, created_at, special_requests
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, customer_name, contact_phone, contact_email, table_id,
                  party_size, reservation_time, created_at, special_requests
        "#,
    )
    .bind(&data.customer_name)
    .bind(&data.contact_phone)
    .bind(&data.contact_email)
    .bind(data.table_id)
    .bind(data.party_size)
    .bind(data.reservation_time)
    .bind(now)
    .bind(&data.special_requests)
    .fetch_one(executor)
    .await?;
    Ok(reservation)
}

/// Whether any reservation for the table starts inside `[start, end)`
pub async fn has_conflict<'c, E>(executor: E, table_id: i64, start: i64, end: i64) -> RepoResult<bool>
where
    E: Executor<'c, Database = Sqlite>,
{
    let exists: i64 = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM reservations \
         WHERE table_id = ? AND reservation_time >= ? AND reservation_time < ?)",
    )
    .bind(table_id)
    .bind(start)
    .bind(end)
    .fetch_one(executor)
    .await?;
    Ok(exists != 0)
}
