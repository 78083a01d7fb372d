//! Asanak gateway

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
use crate::sms::json::int_at;
use crate::sms::rules::{ensure_key_value, ensure_single_phone, unknown_code_message};

const BASE_URL: &str = "https://sms.asanak.ir/webservice/v2rest";

pub struct AsanakProvider {
    transport: HttpTransport,
    base_url: String,
    username: String,
    password: String,
    from: String,
}

impl AsanakProvider {
    pub const NAME: &'static str = "asanak";

    pub fn new(client: Client, credentials: &ProviderCredentials) -> Self {
        Self {
            transport: HttpTransport::new(client, Self::NAME),
            base_url: BASE_URL.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            from: credentials.from.clone(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Credentials ride along in the JSON body
    async fn execute(&self, endpoint: &str, mut body: Value) -> Result<SendOutcome, SmsError> {
        if let Value::Object(map) = &mut body {
            map.insert("username".to_string(), Value::String(self.username.clone()));
            map.insert("password".to_string(), Value::String(self.password.clone()));
        }

        let request = self
            .transport
            .client()
            .post(join_url(&self.base_url, endpoint))
            .header("Accept", "application/json")
            .json(&body);

        let body = self.transport.json(request).await?;
        let response = AsanakResponse {
            status: int_at(&body, "/meta/status"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for AsanakProvider {
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
        ensure_key_value(Self::NAME, variables)?;

        self.execute(
            "template",
            json!({
                "template_id": code,
                "destination": phones[0],
                "parameters": variables,
                "send_to_blacklist": 1,
            }),
        )
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "sendsms",
            json!({
                "source": from,
                "message": message,
                "destination": phones.join(","),
                "send_to_blacklist": 1,
            }),
        )
        .await
    }
}

struct AsanakResponse {
    status: i64,
}

impl ProviderResponse for AsanakResponse {
    fn is_successful(&self) -> bool {
        self.status == 200
    }

    fn error_message(&self) -> String {
        status_message(self.status)
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(self.status)
    }
}

fn status_message(code: i64) -> String {
    let message = match code {
        1008 => "خطای اعتبار سنجی پارامتر های ورودی",
        1014 => "شماره فرستنده (مبدا) مجاز به ارسال لینک نمی باشد.",
        1015 => "خطای مربوط به منقضی شدن کلمه عبور وب سرویس",
        1006 => "خطای مربوط به نداشتن اعتبار کافی برای ارسال",
        1005 => "خطای مربوطه به نداشتن اعتبار کافی پنل نمایندگی",
        1013 => "دربازه زمانی غیر مجاز (تبلیغاتی) فقط شماره های خدماتی مجاز به ارسال می باشند.",
        1002 => "شماره فرستنده (مبدا) فعال نمی باشد.",
        1010 => "لیست شماره های مقصد (گیرنده) صحیح و معتبر نمی باشد.",
        1009 => "خطای مربوطه به محدودیت ارسال روزانه وب سرویس می باشد.",
        429 => "محدودیت درخواست‌ها رسیده است. تعداد درخواست‌ها بیش از حد مجاز است.",
        1004 => "خطای داخلی در سرور رخ داده است.",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
