//! FarazSMS (IPPanel edge) gateway
//!
//! See https://ippanelcom.github.io/Edge-Document/docs/

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::HttpTransport;
use crate::sms::json::{bool_at, field, string_at};
use crate::sms::rules::ensure_key_value;

const BASE_URL: &str = "https://edge.ippanel.com/v1/api/send";

pub struct FarazSmsProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl FarazSmsProvider {
    pub const NAME: &'static str = "faraz_sms";

    pub fn new(client: Client, credentials: &ProviderCredentials) -> Self {
        Self {
            transport: HttpTransport::new(client, Self::NAME),
            base_url: BASE_URL.to_string(),
            token: credentials.token.clone(),
            from: credentials.from.clone(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Every message type goes to the same endpoint, keyed by `sending_type`
    async fn execute(&self, body: Value) -> Result<SendOutcome, SmsError> {
        let request = self
            .transport
            .client()
            .post(&self.base_url)
            .header("Authorization", &self.token)
            .json(&body);

        let body = self.transport.json(request).await?;
        if field(&body, "/meta").is_none() {
            return Err(SmsError::UnexpectedResponse {
                provider: Self::NAME.to_string(),
                reason: "missing meta block".to_string(),
            });
        }

        let response = FarazSmsResponse {
            status: bool_at(&body, "/meta/status"),
            message_code: string_at(&body, "/meta/message_code"),
            message: string_at(&body, "/meta/message"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for FarazSmsProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        &self.from
    }

    async fn send_otp(&self, _phone: &str, _message: &str, _from: &str) -> Result<SendOutcome, SmsError> {
        Err(SmsError::unsupported_method(
            Self::NAME,
            MessageType::Otp,
            MessageType::Pattern,
        ))
    }

    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        from: &str,
    ) -> Result<SendOutcome, SmsError> {
        ensure_key_value(Self::NAME, variables)?;

        self.execute(json!({
            "sending_type": "pattern",
            "from_number": from,
            "code": code,
            "recipients": phones,
            "params": variables,
        }))
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(json!({
            "sending_type": "normal",
            "from_number": from,
            "message": message,
            "params": {
                "recipients": phones,
            },
        }))
        .await
    }
}

struct FarazSmsResponse {
    status: bool,
    message_code: String,
    message: String,
}

impl ProviderResponse for FarazSmsResponse {
    fn is_successful(&self) -> bool {
        self.status
    }

    fn error_message(&self) -> String {
        self.message.clone()
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Text(self.message_code.clone())
    }
}
