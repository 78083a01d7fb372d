//! AmootSMS gateway
//!
//! All calls are GET requests with the token in the query string.

use async_trait::async_trait;
use reqwest::Client;

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{int_at, string_at};
use crate::sms::rules::ensure_single_phone;
use crate::sms::time::tehran_now_iso8601;

const BASE_URL: &str = "https://portal.amootsms.com/rest";

pub struct AmootSmsProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl AmootSmsProvider {
    pub const NAME: &'static str = "amoot_sms";

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

    async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<serde_json::Value, SmsError> {
        let mut params: Vec<(&str, String)> = vec![("Token", self.token.clone())];
        params.extend(query.iter().cloned());

        let request = self
            .transport
            .client()
            .get(join_url(&self.base_url, endpoint))
            .query(&params);

        self.transport.json(request).await
    }

    async fn execute(&self, endpoint: &str, query: &[(&str, String)]) -> Result<SendOutcome, SmsError> {
        let body = self.get(endpoint, query).await?;
        let response = AmootSmsResponse {
            status: string_at(&body, "/Status"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for AmootSmsProvider {
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

        self.execute(
            "SendWithPattern",
            &[
                ("Mobile", phones[0].clone()),
                ("PatternCodeID", code.to_string()),
                ("PatternValues", variables.values().join(",")),
            ],
        )
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "SendSimple",
            &[
                ("LineNumber", from.to_string()),
                ("SMSMessageText", message.to_string()),
                ("Mobiles", phones.join(",")),
                ("SendDateTime", tehran_now_iso8601()),
            ],
        )
        .await
    }

    async fn credit(&self) -> Result<i64, SmsError> {
        let body = self.get("AccountStatus", &[]).await?;
        Ok(int_at(&body, "/RemaindCredit"))
    }
}

/// The gateway answers with a status word; anything but `Success` is a failure
struct AmootSmsResponse {
    status: String,
}

impl ProviderResponse for AmootSmsResponse {
    fn is_successful(&self) -> bool {
        self.status == "Success"
    }

    fn error_message(&self) -> String {
        self.status.clone()
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Text(String::new())
    }
}
