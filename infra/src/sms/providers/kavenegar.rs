//! Kavenegar gateway
//!
//! See https://kavenegar.com/rest.html

use async_trait::async_trait;
use reqwest::Client;

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::int_at;
use crate::sms::rules::{ensure_key_value, ensure_single_phone, unknown_code_message};

const BASE_URL: &str = "https://api.kavenegar.com/v1";

pub struct KavenegarProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl KavenegarProvider {
    pub const NAME: &'static str = "kavenegar";

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

    /// API key travels in the path: `{base}/{token}/{endpoint}.json`
    async fn execute(&self, endpoint: &str, form: Vec<(String, String)>) -> Result<SendOutcome, SmsError> {
        let url = join_url(
            &join_url(&self.base_url, &self.token),
            &format!("{}.json", endpoint),
        );

        let request = self
            .transport
            .client()
            .post(url)
            .header("charset", "utf-8")
            .header("Accept", "application/json")
            .form(&form);

        let body = self.transport.json(request).await?;
        let response = KavenegarResponse {
            status: int_at(&body, "/return/status"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for KavenegarProvider {
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

        let mut form = vec![
            ("receptor".to_string(), phones[0].clone()),
            ("template".to_string(), code.to_string()),
        ];
        form.extend(
            variables
                .entries()
                .into_iter()
                .map(|(key, value)| (key, value.to_string())),
        );

        self.execute("verify/lookup", form).await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        let form = vec![
            ("sender".to_string(), from.to_string()),
            ("message".to_string(), message.to_string()),
            ("receptor".to_string(), phones.join(",")),
        ];

        self.execute("sms/send", form).await
    }
}

struct KavenegarResponse {
    status: i64,
}

impl ProviderResponse for KavenegarResponse {
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

fn status_message(status: i64) -> String {
    let message = match status {
        400 => "پارامترها ناقص هستند",
        401 => "حساب کاربری غیرفعال شده است",
        402 => "عملیات ناموفق بود",
        403 => "کد شناسائی API-Key معتبر نمی‌باشد",
        404 => "متد نامشخص است",
        405 => "متد Get/Post اشتباه است",
        406 => "پارامترهای اجباری خالی ارسال شده اند",
        407 => "دسترسی به اطلاعات مورد نظر برای شما امکان پذیر نیست",
        409 => "سرور قادر به پاسخگوئی نیست بعدا تلاش کنید",
        411 => "دریافت کننده نامعتبر است",
        412 => "ارسال کننده نامعتبر است",
        413 => "پیام خالی است و یا طول پیام بیش از حد مجاز می‌باشد. حداکثر طول کل متن پیامک 900 کاراکتر می باشد",
        414 => "حجم درخواست بیشتر از حد مجاز است ،ارسال پیامک :هر فراخوانی حداکثر 200 رکورد و کنترل وضعیت :هر فراخوانی 500 رکورد",
        415 => "اندیس شروع بزرگ تر از کل تعداد شماره های مورد نظر است",
        416 => "IP سرویس مبدا با تنظیمات مطابقت ندارد",
        417 => "تاریخ ارسال اشتباه است و فرمت آن صحیح نمی باشد.",
        418 => "اعتبار شما کافی نمی‌باشد",
        419 => "طول آرایه متن و گیرنده و فرستنده هم اندازه نیست",
        420 => "استفاده از لینک در متن پیام برای شما محدود شده است",
        422 => "داده ها به دلیل وجود کاراکتر نامناسب قابل پردازش نیست",
        424 => "الگوی مورد نظر پیدا نشد",
        426 => "استفاده از این متد نیازمند سرویس پیشرفته می‌باشد",
        427 => "استفاده از این خط نیازمند ایجاد سطح دسترسی می باشد",
        428 => "ارسال کد از طریق تماس تلفنی امکان پذیر نیست",
        429 => "IP محدود شده است",
        431 => "ساختار کد صحیح نمی‌باشد",
        432 => "پارامتر کد در متن پیام پیدا نشد",
        451 => "فراخوانی بیش از حد در بازه زمانی مشخص IP محدود شده",
        501 => "فقط امکان ارسال پیام تست به شماره صاحب حساب کاربری وجود دارد",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
