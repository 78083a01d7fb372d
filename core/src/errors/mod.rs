//! Error types for the SMS driver contract

mod sms_error;

#[cfg(test)]
mod tests;

pub use sms_error::SmsError;
