//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff role, stored and exchanged in upper case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type), sqlx(rename_all = "UPPERCASE"))]
pub enum Role {
    Waiter,
    Chef,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiter => "WAITER",
            Self::Chef => "CHEF",
            Self::Manager => "MANAGER",
            Self::Admin => "ADMIN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WAITER" => Some(Self::Waiter),
            "CHEF" => Some(Self::Chef),
            "MANAGER" => Some(Self::Manager),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Login account joined with its optional staff profile
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub role: Option<Role>,
}

/// Staff profile as returned by the API (never exposes the hash or PIN)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StaffMember {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
}

/// Create account + staff profile payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCreate {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub pin_code: String,
}

/// `POST /api/auth/token` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /api/auth/token` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub role: Option<Role>,
}

/// `GET /api/auth/me` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserInfo {
    pub user_id: i64,
    pub username: String,
    pub role: Option<Role>,
    pub capabilities: Vec<String>,
}
