//! Provider contract implemented by every SMS gateway adapter

use async_trait::async_trait;

use crate::domain::value_objects::{PatternVariables, SendOutcome};
use crate::errors::SmsError;

/// A concrete SMS gateway
///
/// Each send operation performs at most one HTTP call and reports the vendor's
/// verdict as a [`SendOutcome`]. Operations a gateway cannot perform fail with
/// `SmsError::UnsupportedMethod` before any request is made.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable driver name, e.g. `sms_ir`
    fn name(&self) -> &'static str;

    /// Sender line used when the caller does not pick one
    fn default_sender(&self) -> &str;

    /// Send a one-time password to a single phone
    async fn send_otp(&self, phone: &str, message: &str, from: &str) -> Result<SendOutcome, SmsError>;

    /// Send a provider-side template filled with `variables`
    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        from: &str,
    ) -> Result<SendOutcome, SmsError>;

    /// Send free text
    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError>;

    /// Remaining account balance
    async fn credit(&self) -> Result<i64, SmsError> {
        Err(SmsError::not_implemented(self.name(), "credit"))
    }

    /// Fakes survive driver resolution; real providers are rebuilt every time
    fn is_fake(&self) -> bool {
        false
    }
}
