use chrono_tz::Tz;

use crate::auth::JwtConfig;
use crate::core::{Result, ServerError};

/// Logging options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
    /// Daily rolling log files go here when set
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            dir: None,
        }
    }
}

/// Bootstrap administrator credentials
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub username: String,
    pub password: String,
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | ./data/restaurant.db | SQLite file |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | ENVIRONMENT | development | development / staging / production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
/// | BUSINESS_TIMEZONE | UTC | IANA zone for "today" and reservation input |
/// | RESERVATION_ENFORCE_AVAILABILITY | false | reject conflicting reservations |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | unset | bootstrap admin account |
/// | LOG_LEVEL / LOG_JSON / LOG_DIR | info / false / unset | logging |
///
/// JWT settings are read by [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub jwt: JwtConfig,
    pub request_timeout_ms: u64,
    pub business_timezone: Tz,
    /// Reject reservations for unavailable, undersized or already-booked tables
    pub enforce_reservation_availability: bool,
    pub admin: Option<AdminBootstrap>,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let environment = env_or("ENVIRONMENT", "development");
        let is_production = environment == "production";

        let tz_name = env_or("BUSINESS_TIMEZONE", "UTC");
        let business_timezone: Tz = tz_name
            .parse()
            .map_err(|_| ServerError::Config(format!("Unknown BUSINESS_TIMEZONE: {tz_name}")))?;

        let admin = match (std::env::var("ADMIN_USERNAME"), std::env::var("ADMIN_PASSWORD")) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                Some(AdminBootstrap { username, password })
            }
            _ => None,
        };

        Ok(Self {
            database_path: env_or("DATABASE_PATH", "./data/restaurant.db"),
            http_port: env_parse("HTTP_PORT", 8000),
            jwt: JwtConfig::from_env(is_production)?,
            environment,
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            business_timezone,
            enforce_reservation_availability: env_parse("RESERVATION_ENFORCE_AVAILABILITY", false),
            admin,
            logging: LoggingConfig {
                level: env_or("LOG_LEVEL", "info"),
                json: env_parse("LOG_JSON", false),
                dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            },
        })
    }

    /// Development defaults pointing at the given database file
    ///
    /// Used by tests; does not read the environment.
    pub fn for_database(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            http_port: 0,
            environment: "development".into(),
            jwt: JwtConfig::default(),
            request_timeout_ms: 30000,
            business_timezone: Tz::UTC,
            enforce_reservation_availability: false,
            admin: None,
            logging: LoggingConfig::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
