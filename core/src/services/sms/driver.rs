//! SMS driver: one message, composed once, sent once

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use iran_sms_shared::phone::mask_phone_numbers;

use super::log_policy::LogPolicy;
use super::traits::Provider;
use crate::domain::entities::SmsLog;
use crate::domain::value_objects::{
    Message, MessageType, PatternVariables, Recipients, SendOutcome,
};
use crate::errors::SmsError;
use crate::repositories::SmsLogRepository;

#[derive(Debug, Clone)]
enum State {
    Unset,
    Composed(Message),
    Sent { message: Message, outcome: SendOutcome },
}

/// Message builder and status holder bound to one provider
///
/// Content can be set exactly once through [`otp`](Self::otp),
/// [`pattern`](Self::pattern) or [`text`](Self::text). A failed `send` leaves
/// the content in place so it can be retried; a completed `send` is final.
pub struct Driver {
    provider: Arc<dyn Provider>,
    state: State,
    from: Option<String>,
    log_policy: LogPolicy,
    log_repository: Option<Arc<dyn SmsLogRepository>>,
}

impl Driver {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            state: State::Unset,
            from: None,
            log_policy: LogPolicy::default(),
            log_repository: None,
        }
    }

    /// Attach the store used when the log policy matches a sent message
    pub fn with_log_repository(mut self, repository: Arc<dyn SmsLogRepository>) -> Self {
        self.log_repository = Some(repository);
        self
    }

    /// Compose a one-time password message
    pub fn otp(
        &mut self,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<&mut Self, SmsError> {
        self.compose(Message::Otp {
            phone: phone.into(),
            message: message.into(),
        })
    }

    /// Compose a pattern message
    pub fn pattern(
        &mut self,
        phones: impl Into<Recipients>,
        code: impl Into<String>,
        variables: impl Into<PatternVariables>,
    ) -> Result<&mut Self, SmsError> {
        self.compose(Message::Pattern {
            phones: phones.into().into_vec(),
            code: code.into(),
            variables: variables.into(),
        })
    }

    /// Compose a free text message
    pub fn text(
        &mut self,
        phones: impl Into<Recipients>,
        message: impl Into<String>,
    ) -> Result<&mut Self, SmsError> {
        self.compose(Message::Text {
            phones: phones.into().into_vec(),
            message: message.into(),
        })
    }

    /// Override the provider's default sender line
    pub fn from(&mut self, from: impl Into<String>) -> &mut Self {
        self.from = Some(from.into());
        self
    }

    pub fn log(&mut self, enabled: bool) -> &mut Self {
        self.log_policy.log(enabled);
        self
    }

    pub fn log_otp(&mut self, enabled: bool) -> &mut Self {
        self.log_policy.log_type(MessageType::Otp, enabled);
        self
    }

    pub fn log_pattern(&mut self, enabled: bool) -> &mut Self {
        self.log_policy.log_type(MessageType::Pattern, enabled);
        self
    }

    pub fn log_text(&mut self, enabled: bool) -> &mut Self {
        self.log_policy.log_type(MessageType::Text, enabled);
        self
    }

    pub fn log_successful(&mut self) -> &mut Self {
        self.log_policy.log_successful();
        self
    }

    pub fn log_failed(&mut self) -> &mut Self {
        self.log_policy.log_failed();
        self
    }

    /// Dispatch the composed message to the provider
    ///
    /// # Errors
    /// * `ContentNotSet` before any content was composed
    /// * `AlreadySent` after a completed send
    /// * capability and transport errors from the provider, unchanged
    pub async fn send(&mut self) -> Result<&mut Self, SmsError> {
        let message = match &self.state {
            State::Unset => return Err(SmsError::ContentNotSet),
            State::Sent { .. } => return Err(SmsError::AlreadySent),
            State::Composed(message) => message.clone(),
        };

        let driver = self.provider.name();
        let from = self.sender().to_string();

        debug!(
            driver,
            message_type = %message.message_type(),
            recipients = %mask_phone_numbers(&message.recipients()),
            "Dispatching SMS"
        );

        let result = match &message {
            Message::Otp { phone, message } => self.provider.send_otp(phone, message, &from).await,
            Message::Pattern {
                phones,
                code,
                variables,
            } => self.provider.send_pattern(phones, code, variables, &from).await,
            Message::Text { phones, message } => {
                self.provider.send_text(phones, message, &from).await
            }
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(driver, error = %e, "SMS dispatch failed");
                return Err(e);
            }
        };

        if outcome.successful {
            info!(driver, message_type = %message.message_type(), "SMS sent");
        } else {
            warn!(
                driver,
                code = %outcome.error_code,
                message = %outcome.error_message,
                "Provider rejected SMS"
            );
        }

        self.state = State::Sent { message, outcome };
        self.handle_log().await;

        Ok(self)
    }

    pub fn successful(&self) -> Result<bool, SmsError> {
        Ok(self.outcome()?.successful)
    }

    pub fn failed(&self) -> Result<bool, SmsError> {
        Ok(!self.outcome()?.successful)
    }

    /// `Code {code} - {message}` when the provider rejected the message
    pub fn error(&self) -> Result<Option<String>, SmsError> {
        Ok(self.outcome()?.error())
    }

    /// Provider verdict of the completed send
    pub fn outcome(&self) -> Result<&SendOutcome, SmsError> {
        match &self.state {
            State::Sent { outcome, .. } => Ok(outcome),
            _ => Err(SmsError::NotSentYet),
        }
    }

    /// Remaining balance on the provider account
    pub async fn credit(&self) -> Result<i64, SmsError> {
        self.provider.credit().await
    }

    pub fn driver_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Explicit sender if set, otherwise the provider default
    pub fn sender(&self) -> &str {
        self.from
            .as_deref()
            .unwrap_or_else(|| self.provider.default_sender())
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.state {
            State::Unset => None,
            State::Composed(message) | State::Sent { message, .. } => Some(message),
        }
    }

    pub fn message_type(&self) -> Option<MessageType> {
        self.message().map(Message::message_type)
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.state, State::Sent { .. })
    }

    pub fn log_policy(&self) -> &LogPolicy {
        &self.log_policy
    }

    pub fn provider(&self) -> &Arc<dyn Provider> {
        &self.provider
    }

    fn compose(&mut self, message: Message) -> Result<&mut Self, SmsError> {
        if !matches!(self.state, State::Unset) {
            return Err(SmsError::ContentAlreadySet);
        }
        self.state = State::Composed(message);
        Ok(self)
    }

    async fn handle_log(&self) {
        let State::Sent { message, outcome } = &self.state else {
            return;
        };

        if !self
            .log_policy
            .should_log(message.message_type(), outcome.successful)
        {
            return;
        }

        let Some(repository) = &self.log_repository else {
            debug!(driver = self.provider.name(), "No SMS log repository configured");
            return;
        };

        let log = SmsLog::from_sent(self.provider.name(), self.sender(), message, outcome);
        if let Err(e) = repository.create(&log).await {
            error!(driver = self.provider.name(), error = %e, "Failed to store SMS log");
        }
    }
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("driver", &self.provider.name())
            .field("state", &self.state)
            .field("from", &self.from)
            .field("log_policy", &self.log_policy)
            .finish()
    }
}
