//! Persisted record of a sent SMS

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Message, MessageType, PatternVariables, SendOutcome};

/// Content column of a log record
///
/// Serialized as `{"message": ...}` for otp and text messages and as
/// `{"code": ..., "variables": ...}` for patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogContent {
    Pattern {
        code: String,
        variables: PatternVariables,
    },
    Text {
        message: String,
    },
}

impl LogContent {
    pub fn from_message(message: &Message) -> Self {
        match message {
            Message::Otp { message, .. } | Message::Text { message, .. } => LogContent::Text {
                message: message.clone(),
            },
            Message::Pattern {
                code, variables, ..
            } => LogContent::Pattern {
                code: code.clone(),
                variables: variables.clone(),
            },
        }
    }
}

/// SMS log entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsLog {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub message_type: MessageType,

    /// Driver name, e.g. `sms_ir`
    pub driver: String,

    /// Sender line used for the request
    pub from: String,

    pub to: Vec<String>,

    pub content: LogContent,

    pub is_successful: bool,

    /// `Code {code} - {message}` when the provider rejected the message
    pub error: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl SmsLog {
    /// Build the record for a message a driver has just sent
    pub fn from_sent(driver: &str, from: &str, message: &Message, outcome: &SendOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_type: message.message_type(),
            driver: driver.to_string(),
            from: from.to_string(),
            to: message.recipients(),
            content: LogContent::from_message(message),
            is_successful: outcome.successful,
            error: outcome.error(),
            created_at: Utc::now(),
        }
    }

    /// Check whether the record is older than `days` days relative to `now`
    pub fn is_older_than(&self, days: i64, now: DateTime<Utc>) -> bool {
        self.created_at < now - chrono::Duration::days(days)
    }
}
