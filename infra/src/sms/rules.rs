//! Capability checks shared by the adapters

use iran_sms_core::domain::value_objects::{MessageType, PatternVariables};
use iran_sms_core::errors::SmsError;

/// Require exactly one recipient
pub fn ensure_single_phone(provider: &str, phones: &[String], method: MessageType) -> Result<(), SmsError> {
    if phones.len() != 1 {
        return Err(SmsError::unsupported_multiple_phones(provider, method));
    }
    Ok(())
}

/// Require named pattern variables
pub fn ensure_key_value(provider: &str, variables: &PatternVariables) -> Result<(), SmsError> {
    if !variables.is_key_value() {
        return Err(SmsError::pattern_requires_key_value(provider));
    }
    Ok(())
}

/// Fallback message for codes missing from a provider's table
pub fn unknown_code_message(code: impl std::fmt::Display) -> String {
    format!("خطای ناشناخته با کد {} رخ داده است", code)
}
