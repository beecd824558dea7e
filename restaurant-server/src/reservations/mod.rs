//! Reservation booking
//!
//! A booking inserts the reservation and marks its table Reserved in one
//! transaction. By default no availability check is made at creation; the
//! advisory search lives behind `POST /api/tables/availability`. With
//! `RESERVATION_ENFORCE_AVAILABILITY=true` the same checks run inside the
//! booking transaction and reject the request instead.

use chrono_tz::Tz;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Reservation, ReservationCreate, TableStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

use crate::db::repository::reservation::{self, NewReservation};
use crate::db::repository::{RepoError, dining_table};
use crate::utils::time::{RESERVATION_WINDOW_MILLIS, parse_local_minute};
use crate::utils::validation::{
    FieldErrors, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN, validate_email,
    validate_optional_text, validate_range, validate_required_text,
};

/// Largest party a single reservation may seat
pub const MAX_PARTY_SIZE: i64 = 100;

/// Check every field and resolve the wall-clock time in the business zone.
///
/// All problems are reported together in one `ValidationFailed` error.
pub fn validate_reservation(input: &ReservationCreate, tz: Tz) -> AppResult<NewReservation> {
    let mut errors = FieldErrors::new();

    let customer_name = errors.require(input.customer_name.as_deref(), "customer_name");
    if let Some(name) = customer_name {
        errors.check(validate_required_text(name, "customer_name", MAX_NAME_LEN));
    }
    let contact_phone = errors.require(input.contact_phone.as_deref(), "contact_phone");
    if let Some(phone) = contact_phone {
        errors.check(validate_required_text(phone, "contact_phone", MAX_PHONE_LEN));
    }
    let contact_email = errors.require(input.contact_email.as_deref(), "contact_email");
    if let Some(email) = contact_email {
        errors.check(validate_email(email, "contact_email"));
    }
    let table = errors.require(input.table, "table");
    let party_size = errors.require(input.party_size, "party_size");
    if let Some(size) = party_size {
        errors.check(validate_range(size, "party_size", 1, MAX_PARTY_SIZE));
    }
    let reservation_time = errors
        .require(input.reservation_time.as_deref(), "reservation_time")
        .and_then(|raw| match parse_local_minute(raw, "reservation_time", tz) {
            Ok(millis) => Some(millis),
            Err(err) => {
                errors.check(Err(err));
                None
            }
        });
    errors.check(validate_optional_text(
        &input.special_requests,
        "special_requests",
        MAX_NOTE_LEN,
    ));

    errors.finish()?;

    match (customer_name, contact_phone, contact_email, table, party_size, reservation_time) {
        (Some(name), Some(phone), Some(email), Some(table_id), Some(size), Some(time)) => {
            Ok(NewReservation {
                customer_name: name.trim().to_string(),
                contact_phone: phone.trim().to_string(),
                contact_email: email.trim().to_string(),
                table_id,
                party_size: size,
                reservation_time: time,
                special_requests: input.special_requests.clone(),
            })
        }
        _ => Err(AppError::validation("Missing required fields")),
    }
}

/// Persist the reservation and flip its table to Reserved atomically.
///
/// With `enforce` set, the table must be Available, seat the party and have
/// no reservation starting in `[time, time + 2h)`.
pub async fn create_reservation(
    pool: &SqlitePool,
    data: &NewReservation,
    enforce: bool,
) -> AppResult<Reservation> {
    let mut tx = pool.begin().await.map_err(RepoError::from)?;

    // No-op write so the transaction holds the write lock before any read.
    let touched = sqlx::query("UPDATE dining_tables SET status = status WHERE id = ?")
        .bind(data.table_id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::from)?;
    if touched.rows_affected() == 0 {
        return Err(table_not_found(data.table_id));
    }

    if enforce {
        let table = dining_table::find_by_id(&mut *tx, data.table_id)
            .await?
            .ok_or_else(|| table_not_found(data.table_id))?;

        if table.status != TableStatus::Available {
            return Err(AppError::business_rule(
                ErrorCode::TableUnavailable,
                format!("Table {} is not available", table.number),
            )
            .with_detail("status", table.status.code()));
        }
        if table.capacity < data.party_size {
            return Err(AppError::business_rule(
                ErrorCode::CapacityExceeded,
                format!(
                    "Table {} seats {}, party size is {}",
                    table.number, table.capacity, data.party_size
                ),
            )
            .with_detail("capacity", table.capacity));
        }
        let window_end = data.reservation_time + RESERVATION_WINDOW_MILLIS;
        if reservation::has_conflict(&mut *tx, data.table_id, data.reservation_time, window_end)
            .await?
        {
            return Err(AppError::business_rule(
                ErrorCode::ReservationConflict,
                format!("Table {} already has a reservation in that window", table.number),
            ));
        }
    }

    let created = reservation::insert(&mut *tx, data, now_millis()).await?;
    dining_table::update_status(&mut *tx, data.table_id, TableStatus::Reserved).await?;
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        reservation_id = created.id,
        table_id = created.table,
        party_size = created.party_size,
        "Reservation created"
    );
    Ok(created)
}

fn table_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::TableNotFound, format!("Table {id} not found"))
        .with_detail("table", id)
}
