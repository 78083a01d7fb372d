//! Result of a single provider call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vendor error code, numeric or textual depending on the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Int(i64),
    Text(String),
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::Int(0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Int(code) => write!(f, "{}", code),
            ErrorCode::Text(code) => f.write_str(code),
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        ErrorCode::Int(code)
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        ErrorCode::Int(code as i64)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        ErrorCode::Text(code.to_string())
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::Text(code)
    }
}

/// Status queries every parsed provider response answers
pub trait ProviderResponse {
    fn is_successful(&self) -> bool;
    fn error_message(&self) -> String;
    fn error_code(&self) -> ErrorCode;
}

/// Outcome recorded by a driver after sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub successful: bool,
    pub error_message: String,
    pub error_code: ErrorCode,
}

impl SendOutcome {
    pub fn success() -> Self {
        Self {
            successful: true,
            error_message: String::new(),
            error_code: ErrorCode::default(),
        }
    }

    pub fn failure(message: impl Into<String>, code: impl Into<ErrorCode>) -> Self {
        Self {
            successful: false,
            error_message: message.into(),
            error_code: code.into(),
        }
    }

    /// Snapshot the status queries of a parsed response
    pub fn from_response<R: ProviderResponse + ?Sized>(response: &R) -> Self {
        Self {
            successful: response.is_successful(),
            error_message: response.error_message(),
            error_code: response.error_code(),
        }
    }

    /// `Code {code} - {message}` for failures, `None` on success
    pub fn error(&self) -> Option<String> {
        if self.successful {
            None
        } else {
            Some(format!("Code {} - {}", self.error_code, self.error_message))
        }
    }
}
