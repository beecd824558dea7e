//! Authentication and authorization
//!
//! - [`JwtService`] - issues and validates bearer tokens
//! - [`CurrentUser`] - caller identity resolved from a token
//! - [`Capability`] - what a caller may do, derived from the staff role
//! - [`authenticate`] / [`require_capability`] - middleware

pub mod capability;
pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use capability::{Capability, capabilities_for};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{authenticate, require_capability};
