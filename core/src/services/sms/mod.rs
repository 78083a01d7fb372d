//! SMS driver module
//!
//! - `Provider`: the contract every gateway adapter implements
//! - `Driver`: composes one message, sends it once and answers status queries
//! - `LogPolicy`: which message types and statuses get persisted after sending

mod driver;
mod log_policy;
mod traits;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use log_policy::{LogPolicy, LogStatus};
pub use traits::Provider;
