//! # IranSms Infrastructure
//!
//! Concrete pieces behind the driver contract in `iran_sms_core`:
//! - **SMS**: one adapter per Iranian gateway, a fake for tests and the
//!   `SmsManager` resolving driver names
//! - **Database**: MySQL `SmsLogRepository` using SQLx
//! - **Config / telemetry**: layered configuration loading and tracing setup
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL log storage (default)

pub use iran_sms_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// SMS gateways, fake provider and manager
pub mod sms;

pub mod config;
pub mod telemetry;

pub use sms::SmsManager;
pub use telemetry::init_tracing;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS driver error
    #[error("SMS error: {0}")]
    Sms(#[from] SmsError),
}
