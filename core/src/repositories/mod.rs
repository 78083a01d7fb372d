//! Repository traits for persistence collaborators

pub mod sms_log;

pub use sms_log::{MockSmsLogRepository, NoOpSmsLogRepository, SmsLogRepository};
