//! Staff Repository
//!
//! Login accounts and their staff profiles. An account without a profile can
//! still log in; it just has no role.

use shared::error::AppError;
use shared::models::{Account, Role, StaffMember};
use shared::util::now_millis;
use sqlx::SqlitePool;

use super::RepoResult;
use crate::auth::password::hash_password;

/// Values for a new account plus profile, password already hashed
#[derive(Debug, Clone)]
pub struct NewStaff {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub pin_code: String,
}

pub async fn find_account_by_username(
    pool: &SqlitePool,
    username: &str,
) -> RepoResult<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        "SELECT a.id, a.username, a.password_hash, a.is_active, p.role \
         FROM accounts a LEFT JOIN staff_profiles p ON p.user_id = a.id \
         WHERE a.username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

/// Create the account and its profile together
pub async fn create(pool: &SqlitePool, data: &NewStaff) -> RepoResult<StaffMember> {
    let mut tx = pool.begin().await?;

    let user_id: i64 = sqlx::query_scalar(
        "INSERT INTO accounts (username, password_hash, is_active, created_at) \
         VALUES (?, ?, 1, ?) RETURNING id",
    )
    .bind(&data.username)
    .bind(&data.password_hash)
    .bind(now_millis())
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO staff_profiles (user_id, role, pin_code) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(data.role)
        .bind(&data.pin_code)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(StaffMember {
        user_id,
        username: data.username.clone(),
        role: data.role,
        is_active: true,
    })
}

/// Create the configured admin account on first start; existing accounts are left alone
pub async fn bootstrap_admin(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    if find_account_by_username(pool, username).await?.is_some() {
        tracing::debug!(username = %username, "Admin account already present");
        return Ok(());
    }

    let password_hash =
        hash_password(password).map_err(|e| AppError::internal(format!("hash password: {e}")))?;
    let member = create(
        pool,
        &NewStaff {
            username: username.to_string(),
            password_hash,
            role: Role::Admin,
            pin_code: "0000".to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = member.user_id, username = %member.username, "Admin account created");
    Ok(())
}
