use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, phones, token_credentials};
use crate::sms::providers::LimoSmsProvider;

fn provider(server: &MockServer) -> LimoSmsProvider {
    LimoSmsProvider::new(client(), &token_credentials()).with_base_url(format!("{}/api", server.uri()))
}

#[tokio::test]
async fn test_pattern_sends_values_positionally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sendpatternmessage"))
        .and(header("ApiKey", "test-token"))
        .and(body_json(json!({
            "OtpId": "1500",
            "MobileNumber": "09123456789",
            "ReplaceToken": ["Ali", "1234"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true, "Message": "ارسال شد" })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_pattern(
            &phones(&["09123456789"]),
            "1500",
            &PatternVariables::from([("name", "Ali"), ("code", "1234")]),
            "3000",
        )
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_text_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/sendsms"))
        .and(body_json(json!({
            "SenderNumber": "3000",
            "Message": "Hello",
            "MobileNumber": ["0912", "0913"],
            "SendToBlocksNumber": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": true, "Message": "" })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912", "0913"]), "Hello", "3000")
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_failure_has_code_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Success": false, "Message": "کلید نامعتبر" })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hello", "3000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Int(0));
    assert_eq!(outcome.error().as_deref(), Some("Code 0 - کلید نامعتبر"));
}

#[tokio::test]
async fn test_credit_not_implemented() {
    let server = MockServer::start().await;

    let error = provider(&server).credit().await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "The \"credit()\" method is not implemented for provider \"limo_sms\"."
    );
}
