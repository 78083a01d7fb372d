//! In-memory provider for tests
//!
//! Records every message it is asked to send and answers with a canned
//! `MockResponse`. Nothing leaves the process.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

use iran_sms_core::domain::entities::LogContent;
use iran_sms_core::domain::value_objects::{
    Message, MessageType, MockResponse, PatternVariables, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::phone::mask_phone_numbers;

/// A message handed to a [`FakeProvider`]
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub message_type: MessageType,
    pub recipients: Vec<String>,
    pub from: String,
    pub content: LogContent,
}

pub struct FakeProvider {
    response: MockResponse,
    sent: Mutex<Vec<SentMessage>>,
}

impl FakeProvider {
    pub const NAME: &'static str = "fake";

    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn response(&self) -> &MockResponse {
        &self.response
    }

    /// Everything sent so far, oldest first
    pub fn sent(&self) -> Vec<SentMessage> {
        self.records().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.records().len()
    }

    fn records(&self) -> MutexGuard<'_, Vec<SentMessage>> {
        match self.sent.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn answer(&self, message: Message, from: &str) -> Result<SendOutcome, SmsError> {
        let recipients = message.recipients();
        info!(
            message_type = %message.message_type(),
            recipients = %mask_phone_numbers(&recipients),
            "Fake SMS recorded"
        );

        self.records().push(SentMessage {
            message_type: message.message_type(),
            recipients,
            from: from.to_string(),
            content: LogContent::from_message(&message),
        });

        if self.response.should_throw() {
            return Err(SmsError::Connection {
                provider: Self::NAME.to_string(),
                reason: "simulated connection failure".to_string(),
            });
        }

        Ok(SendOutcome::from_response(&self.response))
    }
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self::new(MockResponse::successful())
    }
}

#[async_trait]
impl Provider for FakeProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        ""
    }

    async fn send_otp(&self, phone: &str, message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.answer(
            Message::Otp {
                phone: phone.to_string(),
                message: message.to_string(),
            },
            from,
        )
    }

    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        from: &str,
    ) -> Result<SendOutcome, SmsError> {
        self.answer(
            Message::Pattern {
                phones: phones.to_vec(),
                code: code.to_string(),
                variables: variables.clone(),
            },
            from,
        )
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.answer(
            Message::Text {
                phones: phones.to_vec(),
                message: message.to_string(),
            },
            from,
        )
    }

    async fn credit(&self) -> Result<i64, SmsError> {
        Ok(0)
    }

    fn is_fake(&self) -> bool {
        true
    }
}
