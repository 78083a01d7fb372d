//! SMS.ir gateway
//!
//! See https://app.sms.ir/developer/help

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

const BASE_URL: &str = "https://api.sms.ir/v1/send";

pub struct SmsIrProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl SmsIrProvider {
    pub const NAME: &'static str = "sms_ir";

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
            .header("x-api-key", &self.token)
            .header("Accept", "application/json")
            .json(&body);

        let body = self.transport.json(request).await?;
        let response = SmsIrResponse {
            status: int_at(&body, "/status"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for SmsIrProvider {
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

        let parameters: Vec<Value> = variables
            .entries()
            .into_iter()
            .map(|(name, value)| json!({ "name": name, "value": value }))
            .collect();

        self.execute(
            "verify",
            json!({
                "mobile": phones[0],
                "templateId": code,
                "parameters": parameters,
            }),
        )
        .await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "bulk",
            json!({
                "lineNumber": from,
                "messageText": message,
                "mobiles": phones,
                "sendDateTime": null,
            }),
        )
        .await
    }
}

struct SmsIrResponse {
    status: i64,
}

impl ProviderResponse for SmsIrResponse {
    fn is_successful(&self) -> bool {
        self.status == 1
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
        1 => "عملیات با موفقیت انجام شد",
        0 => "مشکلی در سامانه رخ داده است، لطفا با پشتیبانی در تماس باشید",
        10 => "کلیدوب سرویس نامعتبر است شد",
        11 => "کلید وب سرویس غیرفعال است",
        12 => "کلیدوب‌ سرویس محدود به  IP های تعریف شده می‌باشد",
        13 => "حساب کاربری غیر فعال است",
        14 => "حساب کاربری در حالت تعلیق قرار دارد",
        20 => "تعداد درخواست بیشتر از حد مجاز است",
        101 => "شماره خط نامعتبر میباشد",
        102 => "اعتبار کافی نمیباشد",
        103 => "درخواست شما دارای متن(های) خالی است",
        104 => "درخواست شما دارای موبایل(های) نادرست است",
        105 => "تعداد موبایل ها بیشتر از حد مجاز (100عدد)میباشد",
        106 => "تعداد متن ها بیشتر ازحد مجاز (100عدد) میباشد",
        107 => "لیست موبایل ها خالی میباشد",
        108 => "لیست متن ها خالی میباشد",
        109 => "زمان ارسال نامعتبر میباشد",
        110 => "تعداد شماره موبایل ها و تعداد متن ها برابر نیستند",
        111 => "با این شناسه ارسالی ثبت نشده است",
        112 => "رکوردی برای حذف یافت نشد",
        113 => "قالب یافت نشد",
        114 => "طول رشته مقدار پارامتر، بیش از حد مجاز (25 کاراکتر) می‌باشد",
        115 => "شماره موبایل ها  در لیست سیاه سامانه می‌باشند",
        116 => "نام پارامتر نمی‌تواند خالی باشد",
        117 => "متن ارسال شده مورد تایید نمی‌باشد",
        118 => "تعداد پیام ها بیش از حد مجاز می باشد.",
        119 => "به منظور استفاده از قالب‌ شخصی سازی شده پلن خود را ارتقا دهید",
        123 => "خط ارسال‌کننده نیاز به فعال‌سازی دارد",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
