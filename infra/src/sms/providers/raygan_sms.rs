//! RayganSMS gateway
//!
//! OTP goes through a legacy ASHX endpoint that answers with a bare number;
//! everything else uses the REST panel behind basic auth.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use iran_sms_core::domain::value_objects::{
    ErrorCode, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{int_at, leading_int, string_at};
use crate::sms::rules::ensure_key_value;
use crate::sms::time::unix_now;

const OTP_URL: &str = "https://raygansms.com/SendMessageWithCode.ashx";
const REST_BASE_URL: &str = "https://smspanel.trez.ir/api/";

/// OTP endpoint returns message ids above this value
const OTP_SUCCESS_THRESHOLD: i64 = 2000;

pub struct RayganSmsProvider {
    transport: HttpTransport,
    otp_url: String,
    rest_base_url: String,
    token: String,
    username: String,
    password: String,
    from: String,
}

impl RayganSmsProvider {
    pub const NAME: &'static str = "raygan_sms";

    pub fn new(client: Client, credentials: &ProviderCredentials) -> Self {
        Self {
            transport: HttpTransport::new(client, Self::NAME),
            otp_url: OTP_URL.to_string(),
            rest_base_url: REST_BASE_URL.to_string(),
            token: credentials.token.clone(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            from: credentials.from.clone(),
        }
    }

    /// Point both endpoints at one host: the OTP call goes to
    /// `{base}/SendMessageWithCode.ashx`, REST calls to `{base}/{endpoint}`
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.otp_url = join_url(&base_url, "SendMessageWithCode.ashx");
        self.rest_base_url = base_url;
        self
    }

    fn rest(&self, endpoint: &str) -> RequestBuilder {
        self.transport
            .client()
            .post(join_url(&self.rest_base_url, endpoint))
            .basic_auth(&self.username, Some(&self.password))
    }

    async fn execute(&self, endpoint: &str, body: Value) -> Result<SendOutcome, SmsError> {
        let body = self.transport.json(self.rest(endpoint).json(&body)).await?;
        let response = RayganSmsResponse::Rest {
            code: int_at(&body, "/Code"),
            message: string_at(&body, "/Message"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for RayganSmsProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        &self.from
    }

    async fn send_otp(&self, phone: &str, message: &str, _from: &str) -> Result<SendOutcome, SmsError> {
        let request = self.transport.client().get(&self.otp_url).query(&[
            ("Username", self.username.as_str()),
            ("Password", self.password.as_str()),
            ("Mobile", phone),
            ("Message", message),
        ]);

        let body = self.transport.text(request).await?;
        let response = RayganSmsResponse::Otp {
            code: leading_int(&body),
        };

        Ok(SendOutcome::from_response(&response))
    }

    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        from: &str,
    ) -> Result<SendOutcome, SmsError> {
        ensure_key_value(Self::NAME, variables)?;

        let mut body = Map::new();
        body.insert("AccessHash".to_string(), json!(self.token));
        body.insert("PhoneNumber".to_string(), json!(from));
        body.insert("PatternId".to_string(), json!(code));
        body.insert("Mobiles".to_string(), json!(phones));
        body.insert("UserGroupID".to_string(), json!(Uuid::new_v4().to_string()));
        body.insert("SendDateInTimeStamp".to_string(), json!(unix_now()));
        for (key, value) in variables.entries() {
            body.insert(key, json!(value));
        }

        self.execute("smsApiWithPattern/SendMessage", Value::Object(body))
            .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "smsAPI/SendMessage",
            json!({
                "PhoneNumber": from,
                "Message": message,
                "Mobiles": phones,
                "UserGroupID": Uuid::new_v4().to_string(),
                "SendDateInTimeStamp": unix_now(),
            }),
        )
        .await
    }

    async fn credit(&self) -> Result<i64, SmsError> {
        let body = self.transport.json(self.rest("smsAPI/GetCredit")).await?;
        Ok(int_at(&body, "/Result"))
    }
}

enum RayganSmsResponse {
    Otp { code: i64 },
    Rest { code: i64, message: String },
}

impl ProviderResponse for RayganSmsResponse {
    fn is_successful(&self) -> bool {
        match self {
            Self::Otp { code } => *code > OTP_SUCCESS_THRESHOLD,
            Self::Rest { code, .. } => *code == 0,
        }
    }

    fn error_message(&self) -> String {
        match self {
            Self::Otp { code } => format!("خطا با کد \"{}\" رخ داده است.", code),
            Self::Rest { message, .. } => message.clone(),
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::Otp { code } | Self::Rest { code, .. } => ErrorCode::Int(*code),
        }
    }
}
