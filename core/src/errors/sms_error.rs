use thiserror::Error;

use crate::domain::value_objects::MessageType;

/// Every failure the driver contract can surface
///
/// Usage errors are returned at the offending call. Transport errors come out
/// of `send()` untouched. A provider rejecting a message is never an error; it
/// is reported through the driver's status queries.
#[derive(Debug, Error)]
pub enum SmsError {
    #[error("SMS object is immutable, to create new SMS content you need to create new instance.")]
    ContentAlreadySet,

    #[error("Before sending an SMS you must define its content by one of these methods \"otp, pattern, text\".")]
    ContentNotSet,

    #[error("To check SMS status, you first must send it with \"send\".")]
    NotSentYet,

    #[error("SMS is already sent, to send another SMS you need to create new instance.")]
    AlreadySent,

    #[error("Provider \"{provider}\" does not support sending \"{method}\" message, please use \"{alternative}\" method instead.")]
    UnsupportedMethod {
        provider: String,
        method: MessageType,
        alternative: MessageType,
    },

    #[error("Provider \"{provider}\" only supports sending to one phone number at a time for \"{method}\" message.")]
    UnsupportedMultiplePhones { provider: String, method: MessageType },

    #[error("{reason}")]
    InvalidPatternStructure { provider: String, reason: String },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Connection to provider \"{provider}\" failed: {reason}")]
    Connection { provider: String, reason: String },

    #[error("Provider \"{provider}\" responded with HTTP status {status}")]
    HttpStatus { provider: String, status: u16 },

    #[error("Provider \"{provider}\" returned an unexpected response: {reason}")]
    UnexpectedResponse { provider: String, reason: String },

    #[error("The \"{operation}()\" method is not implemented for provider \"{provider}\".")]
    NotImplemented { provider: String, operation: String },

    #[error("Driver [{0}] not supported.")]
    UnsupportedDriver(String),

    #[error("Credentials for driver [{0}] are not configured.")]
    MissingCredentials(String),

    #[error("SMS log storage error: {0}")]
    Storage(String),
}

impl SmsError {
    pub fn unsupported_method(provider: &str, method: MessageType, alternative: MessageType) -> Self {
        Self::UnsupportedMethod {
            provider: provider.to_string(),
            method,
            alternative,
        }
    }

    pub fn unsupported_multiple_phones(provider: &str, method: MessageType) -> Self {
        Self::UnsupportedMultiplePhones {
            provider: provider.to_string(),
            method,
        }
    }

    /// Pattern variables were positional but the provider needs names
    pub fn pattern_requires_key_value(provider: &str) -> Self {
        Self::InvalidPatternStructure {
            provider: provider.to_string(),
            reason: format!(
                "Provider \"{}\" only accepts pattern data as key-value pairs.",
                provider
            ),
        }
    }

    pub fn pattern_requires_exactly(provider: &str, count: usize) -> Self {
        Self::InvalidPatternStructure {
            provider: provider.to_string(),
            reason: format!(
                "Provider \"{}\" only accepts pattern data with exactly {} items.",
                provider, count
            ),
        }
    }

    pub fn pattern_allows_at_most(provider: &str, count: usize) -> Self {
        Self::InvalidPatternStructure {
            provider: provider.to_string(),
            reason: format!(
                "Provider \"{}\" supports maximum {} tokens in pattern messages.",
                provider, count
            ),
        }
    }

    pub fn not_implemented(provider: &str, operation: &str) -> Self {
        Self::NotImplemented {
            provider: provider.to_string(),
            operation: operation.to_string(),
        }
    }

    /// True for failures raised before any request left the process
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::ContentAlreadySet
                | Self::ContentNotSet
                | Self::NotSentYet
                | Self::AlreadySent
                | Self::UnsupportedMethod { .. }
                | Self::UnsupportedMultiplePhones { .. }
                | Self::InvalidPatternStructure { .. }
                | Self::InvalidArgument(_)
        )
    }

    /// True when the provider could not be reached or answered with an HTTP error
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::HttpStatus { .. } | Self::UnexpectedResponse { .. }
        )
    }
}
