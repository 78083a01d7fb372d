//! PayamResan (sms-webservice.com) gateway
//!
//! The gateway only returns a tracking id, so every completed call counts as
//! a success and the "error" text carries the id for follow-up.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::int_at;
use crate::sms::rules::{ensure_key_value, ensure_single_phone};

const BASE_URL: &str = "https://api.sms-webservice.com/api/V3";

const PATTERN_VARIABLE_COUNT: usize = 3;

pub struct PayamResanProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl PayamResanProvider {
    pub const NAME: &'static str = "payam_resan";

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

    async fn execute(&self, endpoint: &str, query: Vec<(String, String)>) -> Result<SendOutcome, SmsError> {
        let mut params = vec![("ApiKey".to_string(), self.token.clone())];
        params.extend(query);

        let request = self
            .transport
            .client()
            .get(join_url(&self.base_url, endpoint))
            .header("Accept", "application/json")
            .query(&params);

        let body = self.transport.json(request).await?;
        let response = PayamResanResponse {
            id: int_at(&body, "/id"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for PayamResanProvider {
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
        _from: &str,
    ) -> Result<SendOutcome, SmsError> {
        ensure_single_phone(Self::NAME, phones, MessageType::Pattern)?;
        if variables.len() != PATTERN_VARIABLE_COUNT {
            return Err(SmsError::pattern_requires_exactly(Self::NAME, PATTERN_VARIABLE_COUNT));
        }
        ensure_key_value(Self::NAME, variables)?;

        let mut query = vec![
            ("Destination".to_string(), phones[0].clone()),
            ("TemplateKey".to_string(), code.to_string()),
        ];
        query.extend(
            variables
                .entries()
                .into_iter()
                .map(|(key, value)| (key, value.to_string())),
        );

        self.execute("SendTokenSingle", query).await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        let mut query = vec![
            ("Sender".to_string(), from.to_string()),
            ("Text".to_string(), message.to_string()),
        ];
        query.extend(
            phones
                .iter()
                .enumerate()
                .map(|(index, phone)| (format!("Recipients[{}]", index), phone.clone())),
        );

        self.execute("Send", query).await
    }

    async fn credit(&self) -> Result<i64, SmsError> {
        let request = self
            .transport
            .client()
            .post(join_url(&self.base_url, "AccountInfo"))
            .json(&json!({ "ApiKey": self.token }));

        let body = self.transport.json(request).await?;
        Ok(int_at(&body, "/Credit"))
    }
}

struct PayamResanResponse {
    id: i64,
}

impl ProviderResponse for PayamResanResponse {
    fn is_successful(&self) -> bool {
        true
    }

    fn error_message(&self) -> String {
        format!("شناسه پیام برای پیگیری \"{}\" می باشد.", self.id)
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(self.id)
    }
}
