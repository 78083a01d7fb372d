//! Services module

pub mod sms;

pub use sms::{Driver, LogPolicy, LogStatus, Provider};
