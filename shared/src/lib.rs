//! Shared configuration and utilities for the IranSms drivers
//!
//! This crate provides common functionality used across the workspace:
//! - Provider credentials and driver selection
//! - Database and logging configuration
//! - Phone number helpers (normalization, masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    DatabaseConfig, LogFormat, LoggingConfig, ProviderCredentials, SmsConfig, PROVIDER_NAMES,
};
pub use utils::phone;
