//! LimoSMS gateway

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{bool_at, string_at};
use crate::sms::rules::ensure_single_phone;

const BASE_URL: &str = "https://api.limosms.com/api";

pub struct LimoSmsProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl LimoSmsProvider {
    pub const NAME: &'static str = "limo_sms";

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

    async fn execute(&self, endpoint: &str, body: Value) -> Result<SendOutcome, SmsError> {
        let request = self
            .transport
            .client()
            .post(join_url(&self.base_url, endpoint))
            .header("ApiKey", &self.token)
            .json(&body);

        let body = self.transport.json(request).await?;
        let response = LimoSmsResponse {
            success: bool_at(&body, "/Success"),
            message: string_at(&body, "/Message"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for LimoSmsProvider {
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

    /// Variables are sent positionally; names are dropped
    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        _from: &str,
    ) -> Result<SendOutcome, SmsError> {
        ensure_single_phone(Self::NAME, phones, MessageType::Pattern)?;

        self.execute(
            "sendpatternmessage",
            json!({
                "OtpId": code,
                "MobileNumber": phones[0],
                "ReplaceToken": variables.values(),
            }),
        )
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "sendsms",
            json!({
                "SenderNumber": from,
                "Message": message,
                "MobileNumber": phones,
                "SendToBlocksNumber": true,
            }),
        )
        .await
    }

    // The balance endpoint is undocumented.
    async fn credit(&self) -> Result<i64, SmsError> {
        Err(SmsError::not_implemented(Self::NAME, "credit"))
    }
}

struct LimoSmsResponse {
    success: bool,
    message: String,
}

impl ProviderResponse for LimoSmsResponse {
    fn is_successful(&self) -> bool {
        self.success
    }

    fn error_message(&self) -> String {
        self.message.clone()
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(0)
    }
}
