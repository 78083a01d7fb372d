//! # IranSms Core
//!
//! Driver contract for Iranian SMS gateways.
//! This crate contains the message value objects, the `Driver` state machine,
//! the `Provider` trait adapters implement, the log policy and the log
//! repository interface.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
