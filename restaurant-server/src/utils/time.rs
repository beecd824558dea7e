//! Business time zone helpers
//!
//! Date and wall-clock inputs are converted to Unix millis at the handler
//! boundary; repositories only see `i64` millis.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use super::{AppError, AppResult, ErrorCode};

/// Wall-clock format accepted for reservation and availability times
pub const LOCAL_MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Length of the window a reservation occupies its table
pub const RESERVATION_WINDOW_MILLIS: i64 = 2 * 60 * 60 * 1000;

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid date format: {date}, expected YYYY-MM-DD"),
        )
        .with_detail("field", "date")
    })
}

/// Parse `YYYY-MM-DDTHH:MM` in the business time zone into Unix millis
pub fn parse_local_minute(value: &str, field: &str, tz: Tz) -> AppResult<i64> {
    let naive = NaiveDateTime::parse_from_str(value, LOCAL_MINUTE_FORMAT).map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must use the format YYYY-MM-DDTHH:MM, got {value:?}"),
        )
        .with_detail("field", field)
    })?;
    Ok(local_to_millis(naive, tz))
}

/// Longest DST gap searched when a wall-clock time does not exist
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Local wall-clock time to Unix millis.
///
/// A time inside a DST gap resolves to the first valid instant after the
/// gap, i.e. the transition itself.
pub fn local_to_millis(naive: NaiveDateTime, tz: Tz) -> i64 {
    if let Some(dt) = naive.and_local_timezone(tz).latest() {
        return dt.timestamp_millis();
    }
    (1..=MAX_GAP_MINUTES)
        .filter_map(|m| naive.checked_add_signed(chrono::Duration::minutes(m)))
        .find_map(|t| t.and_local_timezone(tz).earliest())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of the day (00:00) in Unix millis
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    local_to_millis(date.and_time(chrono::NaiveTime::MIN), tz)
}

/// Start of the following day; callers use `< end` (exclusive)
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start_millis(next_day, tz)
}

/// Today's date in the business time zone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}
