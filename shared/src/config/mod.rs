//! Configuration module
//!
//! - `sms` - Default driver and per-provider credentials
//! - `database` - Connection pool settings for the SMS log store
//! - `logging` - Log level and output format

pub mod database;
pub mod logging;
pub mod sms;

pub use database::DatabaseConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use sms::{ProviderCredentials, SmsConfig, PROVIDER_NAMES};
