//! Input validation helpers
//!
//! Centralized text length limits and field checks. SQLite TEXT has no
//! built-in length enforcement, so every handler validates before writing.

use serde_json::{Map, Value};
use shared::money::Hundredths;

use super::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Menu item, ingredient and customer names
pub const MAX_NAME_LEN: usize = 100;

/// Menu item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Special requests on orders and reservations
pub const MAX_NOTE_LEN: usize = 500;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 15;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Table number label
pub const MAX_TABLE_NUMBER_LEN: usize = 4;

/// Table location label
pub const MAX_LOCATION_LEN: usize = 50;

/// Ingredient unit label
pub const MAX_UNIT_LEN: usize = 20;

/// Login names
pub const MAX_USERNAME_LEN: usize = 150;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Largest quantity accepted on one order line
pub const MAX_LINE_QUANTITY: i64 = 9999;

// ── Single-field helpers ────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::field(
            ErrorCode::RequiredField,
            field,
            format!("{field} must not be empty"),
        ));
    }
    validate_optional_text(value, field, max_len)
}

/// Validate that a string, possibly empty, is within the length limit.
pub fn validate_optional_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(())
}

/// Validate an integer lies in `min..=max`.
pub fn validate_range(value: i64, field: &str, min: i64, max: i64) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::field(
            ErrorCode::ValueOutOfRange,
            field,
            format!("{field} must be between {min} and {max}, got {value}"),
        ));
    }
    Ok(())
}

/// Validate an amount lies in `0.00..=max`.
pub fn validate_amount(
    value: Hundredths,
    field: &str,
    max: Hundredths,
    code: ErrorCode,
) -> Result<(), AppError> {
    if !value.within(max) {
        return Err(AppError::field(
            code,
            field,
            format!("{field} must be between 0.00 and {max}, got {value}"),
        ));
    }
    Ok(())
}

/// Minimal shape check: one `@` with text on both sides and a dot in the domain.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(AppError::field(
            ErrorCode::InvalidFormat,
            field,
            format!("{field} is not a valid email address"),
        ));
    }
    Ok(())
}

/// Staff PIN: exactly four ASCII digits.
pub fn validate_pin(pin: &str) -> Result<(), AppError> {
    if pin.len() != 4 || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::field(
            ErrorCode::InvalidPin,
            "pin_code",
            "pin_code must be exactly 4 digits",
        ));
    }
    Ok(())
}

// ── Multi-field collection ──────────────────────────────────────────

/// Collects per-field failures so a request reports every bad field at once.
///
/// Finishes as a single `ValidationFailed` error whose `fields` detail maps
/// each field to its message.
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: Map<String, Value>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| Value::String(message.into()));
    }

    /// Record the outcome of a single-field check.
    pub fn check(&mut self, result: Result<(), AppError>) {
        if let Err(err) = result {
            let field = err
                .details
                .as_ref()
                .and_then(|d| d.get("field"))
                .and_then(Value::as_str)
                .unwrap_or("request")
                .to_string();
            self.add(&field, err.message);
        }
    }

    /// Unwrap a required value, recording it as missing when absent.
    pub fn require<T>(&mut self, value: Option<T>, field: &str) -> Option<T> {
        if value.is_none() {
            self.add(field, "This field is required.");
        }
        value
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.fields.is_empty() {
            return Ok(());
        }
        let names: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        let message = format!("Invalid fields: {}", names.join(", "));
        Err(AppError::validation(message).with_detail("fields", Value::Object(self.fields)))
    }
}
