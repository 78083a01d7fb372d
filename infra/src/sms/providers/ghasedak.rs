//! Ghasedak gateway
//!
//! See https://ghasedak.me/docs

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{bool_at, field, int_at, string_at};
use crate::sms::rules::ensure_key_value;
use crate::sms::time::utc_now_iso8601;

const BASE_URL: &str = "https://gateway.ghasedak.me/rest/api/v1/WebService";

pub struct GhasedakProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl GhasedakProvider {
    pub const NAME: &'static str = "ghasedak";

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

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("ApiKey", &self.token)
            .header("Accept", "application/json")
    }

    async fn execute(&self, endpoint: &str, body: Value) -> Result<SendOutcome, SmsError> {
        let request = self.authorized(
            self.transport
                .client()
                .post(join_url(&self.base_url, endpoint))
                .json(&body),
        );

        let body = self.transport.json(request).await?;
        if field(&body, "/IsSuccess").is_none() {
            return Err(SmsError::UnexpectedResponse {
                provider: Self::NAME.to_string(),
                reason: "missing IsSuccess field".to_string(),
            });
        }

        let response = GhasedakResponse {
            is_success: bool_at(&body, "/IsSuccess"),
            status_code: int_at(&body, "/StatusCode"),
            message: string_at(&body, "/Message"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for GhasedakProvider {
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
        ensure_key_value(Self::NAME, variables)?;

        let receptors: Vec<Value> = phones
            .iter()
            .map(|phone| json!({ "mobile": phone, "clientReferenceId": null }))
            .collect();
        let inputs: Vec<Value> = variables
            .entries()
            .into_iter()
            .map(|(param, value)| json!({ "param": param, "value": value }))
            .collect();

        self.execute(
            "SendOtpSMS",
            json!({
                "templateName": code,
                "receptors": receptors,
                "inputs": inputs,
                "udh": false,
                "sendDate": utc_now_iso8601(),
            }),
        )
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "SendBulkSMS",
            json!({
                "lineNumber": from,
                "message": message,
                "receptors": phones,
                "clientReferenceId": null,
                "isVoice": false,
                "udh": false,
                "sendDate": utc_now_iso8601(),
            }),
        )
        .await
    }

    async fn credit(&self) -> Result<i64, SmsError> {
        let request = self.authorized(
            self.transport
                .client()
                .get(join_url(&self.base_url, "GetAccountInformation")),
        );

        let body = self.transport.json(request).await?;
        Ok(int_at(&body, "/Data/Credit"))
    }
}

struct GhasedakResponse {
    is_success: bool,
    status_code: i64,
    message: String,
}

impl ProviderResponse for GhasedakResponse {
    fn is_successful(&self) -> bool {
        self.is_success
    }

    fn error_message(&self) -> String {
        self.message.clone()
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(self.status_code)
    }
}
