//! Canned outcomes for faked providers

use super::outcome::{ErrorCode, ProviderResponse};

/// Describes how a fake provider answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    successful: bool,
    error_message: String,
    error_code: ErrorCode,
    should_throw: bool,
}

impl MockResponse {
    /// The provider accepts the message
    pub fn successful() -> Self {
        Self {
            successful: true,
            error_message: String::new(),
            error_code: ErrorCode::default(),
            should_throw: false,
        }
    }

    /// The provider rejects the message with the given message and code
    pub fn failed(error_message: impl Into<String>, error_code: impl Into<ErrorCode>) -> Self {
        Self {
            successful: false,
            error_message: error_message.into(),
            error_code: error_code.into(),
            should_throw: false,
        }
    }

    /// The provider cannot be reached
    pub fn throw() -> Self {
        Self {
            successful: false,
            error_message: String::new(),
            error_code: ErrorCode::default(),
            should_throw: true,
        }
    }

    pub fn should_throw(&self) -> bool {
        self.should_throw
    }
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::successful()
    }
}

impl ProviderResponse for MockResponse {
    fn is_successful(&self) -> bool {
        self.successful
    }

    fn error_message(&self) -> String {
        self.error_message.clone()
    }

    fn error_code(&self) -> ErrorCode {
        self.error_code.clone()
    }
}
