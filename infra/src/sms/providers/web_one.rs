//! WebOne (payamakapi.ir) gateway

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
use crate::sms::json::{bool_at, int_at, leading_int};
use crate::sms::rules::unknown_code_message;

const BASE_URL: &str = "https://api.payamakapi.ir/api/v1";

pub struct WebOneProvider {
    transport: HttpTransport,
    base_url: String,
    token: String,
    from: String,
}

impl WebOneProvider {
    pub const NAME: &'static str = "web_one";

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
        request.header("X-API-KEY", &self.token)
    }

    async fn execute(&self, endpoint: &str, body: Value) -> Result<SendOutcome, SmsError> {
        let request = self.authorized(
            self.transport
                .client()
                .post(join_url(&self.base_url, endpoint))
                .json(&body),
        );

        let body = self.transport.json(request).await?;
        let response = WebOneResponse {
            succeeded: bool_at(&body, "/succeeded"),
            result_code: int_at(&body, "/resultCode"),
        };

        Ok(SendOutcome::from_response(&response))
    }
}

#[async_trait]
impl Provider for WebOneProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        &self.from
    }

    async fn send_otp(&self, phone: &str, message: &str, _from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "SMS/SmartOTP",
            json!({
                "ToNumber": phone,
                "Content": message,
            }),
        )
        .await
    }

    async fn send_pattern(
        &self,
        _phones: &[String],
        _code: &str,
        _variables: &PatternVariables,
        _from: &str,
    ) -> Result<SendOutcome, SmsError> {
        Err(SmsError::unsupported_method(
            Self::NAME,
            MessageType::Pattern,
            MessageType::Text,
        ))
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.execute(
            "SMS/Send",
            json!({
                "From": from,
                "ToNumbers": phones,
                "Content": message,
            }),
        )
        .await
    }

    /// Balance comes back as a bare number in the body
    async fn credit(&self) -> Result<i64, SmsError> {
        let request = self.authorized(
            self.transport
                .client()
                .get(join_url(&self.base_url, "SMS/GetCredit")),
        );

        let body = self.transport.text(request).await?;
        Ok(leading_int(&body))
    }
}

struct WebOneResponse {
    succeeded: bool,
    result_code: i64,
}

impl ProviderResponse for WebOneResponse {
    fn is_successful(&self) -> bool {
        self.succeeded
    }

    fn error_message(&self) -> String {
        status_message(self.result_code)
    }

    fn error_code(&self) -> ErrorCode {
        ErrorCode::Int(self.result_code)
    }
}

fn status_message(code: i64) -> String {
    let message = match code {
        0 => "ارسال با موفقيت انجام شد",
        1 => "نام كاربر يا كلمه عبور نامعتبر مي باشد",
        2 => "كاربر مسدود شده است",
        3 => "محدوديت در ارسال روزانه",
        4 => "شماره فرستنده نامعتبر است",
        5 => "تعداد گيرندگان حداكثر 100 شماره مي باشد",
        6 => "خط فرستنده غيرفعال است",
        7 => "متن پيامك شامل كلمات فيلتر شده است",
        8 => "اعتبار كافي نيست",
        9 => "سامانه در حال بروز رساني است",
        10 => "وب سرويس غيرفعال است",
        12 => "تعداد پيامها و شماره ها بايد يكسان باشد",
        13 => "حداكثر تعداد مجاز در يك درخواست ارسال متناظر 500 شماره مي باشد",
        14 => "كاربر فاقد تعرفه مي باشد",
        15 => "ارسال تكراري متن مشابه به شماره مشابه در مدت زمان مشخص",
        16 => "موبايل گيرنده يافت نشد",
        17 => "خط OTP براي كاربر يافت نشد",
        18 => "با اين شماره فقط ارسال تكي مجاز است",
        19 => "متن ارسالي شما با الگوي تعريفي شما مطابقت ندارد",
        21 => "آي پي شما براي ارسال از وب سرويس مجاز نمي باشد",
        22 => "عدم تاييد يا ارسال كارت ملي كاربر",
        other => return unknown_code_message(other),
    };
    message.to_string()
}
