//! Payamak Panel REST API shared by MeliPayamak and FaraPayamak
//!
//! See https://www.melipayamak.com/api/

use reqwest::Client;

use iran_sms_core::domain::value_objects::{
    ErrorCode, MessageType, PatternVariables, ProviderResponse, SendOutcome,
};
use iran_sms_core::errors::SmsError;
use iran_sms_shared::config::ProviderCredentials;

use crate::sms::http::{join_url, HttpTransport};
use crate::sms::json::{int_at, string_at};
use crate::sms::rules::{ensure_single_phone, unknown_code_message};

pub(crate) const BASE_URL: &str = "https://rest.payamak-panel.com/api/SendSMS";

/// Successful sends answer with a recipient id of at least this many characters
const MIN_RECIPIENT_ID_LEN: usize = 15;

pub(crate) struct PayamakPanel {
    name: &'static str,
    transport: HttpTransport,
    pub(crate) base_url: String,
    username: String,
    password: String,
    pub(crate) from: String,
}

impl PayamakPanel {
    pub(crate) fn new(name: &'static str, client: Client, credentials: &ProviderCredentials) -> Self {
        Self {
            name,
            transport: HttpTransport::new(client, name),
            base_url: BASE_URL.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            from: credentials.from.clone(),
        }
    }

    /// POST a form with the account credentials merged in
    async fn post(&self, endpoint: &str, data: &[(&str, String)]) -> Result<serde_json::Value, SmsError> {
        let mut form: Vec<(&str, String)> = vec![
            ("username", self.username.clone()),
            ("password", self.password.clone()),
        ];
        form.extend(data.iter().cloned());

        let request = self
            .transport
            .client()
            .post(join_url(&self.base_url, endpoint))
            .header("Accept", "application/json")
            .form(&form);

        self.transport.json(request).await
    }

    async fn execute(&self, endpoint: &str, data: &[(&str, String)]) -> Result<SendOutcome, SmsError> {
        let body = self.post(endpoint, data).await?;
        let response = PayamakPanelResponse {
            value: string_at(&body, "/Value"),
        };

        Ok(SendOutcome::from_response(&response))
    }

    pub(crate) fn unsupported_otp(&self) -> SmsError {
        SmsError::unsupported_method(self.name, MessageType::Otp, MessageType::Pattern)
    }

    /// Pattern values are sent positionally, joined with `;`
    pub(crate) async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
    ) -> Result<SendOutcome, SmsError> {
        ensure_single_phone(self.name, phones, MessageType::Pattern)?;

        self.execute(
            "BaseServiceNumber",
            &[
                ("to", phones[0].clone()),
                ("bodyId", code.to_string()),
                ("text", variables.values().join(";")),
            ],
        )
        .await
    }

    pub(crate) async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "SendSMS",
            &[
                ("from", from.to_string()),
                ("text", message.to_string()),
                ("to", phones.join(",")),
            ],
        )
        .await
    }

    pub(crate) async fn credit(&self) -> Result<i64, SmsError> {
        let body = self.post("GetCredit", &[]).await?;
        Ok(int_at(&body, "/Value"))
    }
}

struct PayamakPanelResponse {
    value: String,
}

impl ProviderResponse for PayamakPanelResponse {
    fn is_successful(&self) -> bool {
        self.value.chars().count() >= MIN_RECIPIENT_ID_LEN
    }

    fn error_message(&self) -> String {
        status_message(&self.value)
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Text(self.value.clone())
    }
}

fn status_message(value: &str) -> String {
    let message = match value {
        "-10" => "متن حاوی لینک می‌باشد",
        "-7" => "خطایی در شماره فرستنده رخ داده است با پشتیبانی تماس بگیرید",
        "-6" => "خطای داخلی رخ داده است با پشتیبانی تماس بگیرید",
        "-5" => "متن ارسالی باتوجه به متغیرهای مشخص شده در متن پیشفرض همخوانی ندارد",
        "-4" => "کد متن ارسالی صحیح نمی‌باشد و یا توسط مدیر سامانه تأیید نشده است",
        "-3" => "خط ارسالی در سیستم تعریف نشده است، با پشتیبانی سامانه تماس بگیرید",
        "-2" => "محدودیت تعداد شماره، محدودیت هربار ارسال یک شماره موبایل می‌باشد",
        "-1" => "دسترسی برای استفاده از این وبسرویس غیرفعال است. با پشتیبانی تماس بگیرید",
        "0" => "نام کاربری یا رمزعبور صحیح نمی‌باشد",
        "2" => "اعتبار کافی نمی‌باشد",
        "3" => "محدودیت در ارسال روزانه",
        "4" => "محدودیت در حجم ارسال",
        "5" => "شماره فرستنده معتبر نمی‌باشد",
        "6" => "سامانه درحال بروزرسانی می‌باشد",
        "7" => "متن حاوی کلمه فیلتر شده می‌باشد",
        "9" => "ارسال از خطوط عمومی از طریق وب سرویس امکان‌پذیر نمی‌باشد",
        "10" => "کاربر موردنظر فعال نمی‌باشد",
        "11" => "ارسال نشده",
        "12" => "مدارک کاربر کامل نمی‌باشد",
        "14" => "متن حاوی لینک می‌باشد",
        "15" => "ارسال به بیش از 1 شماره همراه بدون درج \"لغو11\" ممکن نیست",
        "16" => "شماره گیرنده‌ای یافت نشد",
        "17" => "متن پیامک خالی می‌باشد",
        "35" => "شماره در لیست سیاه مخابرات می‌باشد",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
