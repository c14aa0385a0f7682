//! Unified error types and result handling.
//!
//! Store/transport failures surface as typed errors; data-shape anomalies
//! (missing contract numbers, unparseable costs) are handled by fallbacks in
//! the core modules and never raised as errors.

use thiserror::Error;

/// Crate-wide error type covering configuration, persistence, and the
/// domain-level failures the core operations can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration or input-validation failure
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was invalid
        message: String,
    },

    /// Database error from the SeaORM layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// A record was looked up by key and does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was requested (e.g. "coupon", "schedule")
        entity: &'static str,
        /// The key that failed to resolve
        id: String,
    },

    /// A coupon was presented for redemption a second time
    #[error("Coupon {number} has already been used")]
    CouponAlreadyUsed {
        /// The coupon number
        number: String,
    },

    /// A coupon number collided with an existing one at registration
    #[error("Coupon number {number} is already registered")]
    DuplicateCoupon {
        /// The coupon number
        number: String,
    },

    /// A coupon issuance targeted a coupon some customer already holds
    #[error("Coupon {number} is already issued to {customer}")]
    CouponAlreadyIssued {
        /// The coupon number
        number: String,
        /// The customer currently holding it
        customer: String,
    },

    /// Username/password pair did not match a stored user.
    /// Deliberately does not distinguish unknown user from wrong password.
    #[error("Login failed for {username}")]
    LoginFailed {
        /// The username that attempted to log in
        username: String,
    },

    /// Session snapshot (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
