use crate::domain::value_objects::MessageType;
use crate::errors::SmsError;

#[test]
fn test_unsupported_method_message() {
    let error = SmsError::unsupported_method("sms_ir", MessageType::Otp, MessageType::Pattern);
    assert_eq!(
        error.to_string(),
        "Provider \"sms_ir\" does not support sending \"otp\" message, please use \"pattern\" method instead."
    );
}

#[test]
fn test_unsupported_multiple_phones_message() {
    let error = SmsError::unsupported_multiple_phones("kavenegar", MessageType::Pattern);
    assert_eq!(
        error.to_string(),
        "Provider \"kavenegar\" only supports sending to one phone number at a time for \"pattern\" message."
    );
}

#[test]
fn test_invalid_pattern_structure_messages() {
    assert_eq!(
        SmsError::pattern_requires_key_value("ghasedak").to_string(),
        "Provider \"ghasedak\" only accepts pattern data as key-value pairs."
    );
    assert_eq!(
        SmsError::pattern_requires_exactly("payam_resan", 3).to_string(),
        "Provider \"payam_resan\" only accepts pattern data with exactly 3 items."
    );
    assert_eq!(
        SmsError::pattern_allows_at_most("sahar_sms", 5).to_string(),
        "Provider \"sahar_sms\" supports maximum 5 tokens in pattern messages."
    );
}

#[test]
fn test_lifecycle_messages() {
    assert_eq!(
        SmsError::ContentNotSet.to_string(),
        "Before sending an SMS you must define its content by one of these methods \"otp, pattern, text\"."
    );
    assert_eq!(
        SmsError::NotSentYet.to_string(),
        "To check SMS status, you first must send it with \"send\"."
    );
    assert_eq!(
        SmsError::UnsupportedDriver("nope".to_string()).to_string(),
        "Driver [nope] not supported."
    );
}

#[test]
fn test_error_classification() {
    assert!(SmsError::ContentAlreadySet.is_usage_error());
    assert!(SmsError::pattern_requires_key_value("x").is_usage_error());
    assert!(!SmsError::ContentAlreadySet.is_transport_error());

    let connection = SmsError::Connection {
        provider: "fake".to_string(),
        reason: "refused".to_string(),
    };
    assert!(connection.is_transport_error());
    assert!(!connection.is_usage_error());
}
