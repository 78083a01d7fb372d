//! SaharSMS gateway
//!
//! Plain text goes through the verify endpoint, so only one recipient is
//! accepted per text message.

use async_trait::async_trait;
use reqwest::Client;

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;
use iran_sms_shared::phone::to_iran_international;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{field, int_at, string_at};
use crate::sms::rules::{ensure_single_phone, unknown_code_message};

const BASE_URL: &str = "https://www.saharsms.com/api";

const OTP_TEMPLATE: &str = "saharsms_otp";
const MAX_PATTERN_TOKENS: usize = 5;

pub struct SaharSmsProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl SaharSmsProvider {
    pub const NAME: &'static str = "sahar_sms";

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

    /// `{base}/{token}/json/{endpoint}`
    async fn execute(&self, endpoint: &str, form: Vec<(String, String)>) -> Result<SendOutcome, SmsError> {
        let url = join_url(
            &join_url(&join_url(&self.base_url, &self.token), "json"),
            endpoint,
        );

        let request = self
            .transport
            .client()
            .post(url)
            .header("Accept", "application/json")
            .header("charset", "utf-8")
            .form(&form);

        let body = self.transport.json(request).await?;
        let status = if field(&body, "/return/status").is_some() {
            int_at(&body, "/return/status")
        } else {
            int_at(&body, "/status")
        };

        let response = SaharSmsResponse {
            message_id: string_at(&body, "/messageid"),
            status,
            message: field(&body, "/return/message").map(|_| string_at(&body, "/return/message")),
        };

        Ok(SendOutcome::from_response(&response))
    }

    async fn verify(&self, phone: &str, message: &str) -> Result<SendOutcome, SmsError> {
        if phone.is_empty() {
            return Err(SmsError::InvalidArgument("Phone number cannot be empty".to_string()));
        }

        self.execute(
            "SendVerify",
            vec![
                ("receptor".to_string(), to_iran_international(phone)),
                ("token".to_string(), message.to_string()),
                ("template".to_string(), OTP_TEMPLATE.to_string()),
            ],
        )
        .await
    }
}

#[async_trait]
impl Provider for SaharSmsProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        &self.from
    }

    async fn send_otp(&self, phone: &str, message: &str, _from: &str) -> Result<SendOutcome, SmsError> {
        self.verify(phone, message).await
    }

    /// Both named and positional variables are accepted; only their order matters
    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        _from: &str,
    ) -> Result<SendOutcome, SmsError> {
        ensure_single_phone(Self::NAME, phones, MessageType::Pattern)?;
        if variables.len() > MAX_PATTERN_TOKENS {
            return Err(SmsError::pattern_allows_at_most(Self::NAME, MAX_PATTERN_TOKENS));
        }

        let mut form = vec![
            ("receptor".to_string(), to_iran_international(&phones[0])),
            ("name".to_string(), code.to_string()),
        ];
        form.extend(
            variables
                .values()
                .into_iter()
                .enumerate()
                .map(|(index, value)| (format!("token{}", index + 1), value.to_string())),
        );

        self.execute("sendPatternSMS", form).await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        if phones.len() > 1 {
            return Err(SmsError::unsupported_multiple_phones(Self::NAME, MessageType::Text));
        }

        let phone = phones.first().map(String::as_str).unwrap_or_default();
        self.send_otp(phone, message, from).await
    }
}

struct SaharSmsResponse {
    message_id: String,
    status: i64,
    message: Option<String>,
}

impl ProviderResponse for SaharSmsResponse {
    fn is_successful(&self) -> bool {
        !self.message_id.is_empty() && self.message_id != "0"
    }

    fn error_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => status_message(self.status),
        }
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(self.status)
    }
}

fn status_message(code: i64) -> String {
    let message = match code {
        400 => "پارامترها ناقص هستند",
        402 => "متدی با این نام پیدا نشده است",
        404 => "متد فراخوانی Get یا Post اشتباه است",
        409 => "سرور قادر به پاسخگوئی نیست بعدا تلاش کنید",
        418 => "اعتبار حساب شما کافی نیست",
        422 => "داده ها به دلیل وجود کاراکتر نامناسب قابل پردازش نیست",
        424 => "الگوی مورد نظر پیدا نشد",
        426 => "استفاده از این متد نیازمند سرویس پیشرفته می باشد",
        428 => "ارسال کد از طریق تماس تلفنی امکان پذیر نیست",
        431 => "ساختار کد صحیح نمی باشد",
        432 => "پارامتر کد در متن پیام پیدا نشد",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
