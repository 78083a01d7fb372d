//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management
//! - MySQL `SmsLogRepository` storing into `sms_logs`

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlSmsLogRepository;

#[cfg(test)]
mod tests;
