use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, phones, token_credentials};
use crate::sms::providers::SmsIrProvider;

fn provider(server: &MockServer) -> SmsIrProvider {
    SmsIrProvider::new(client(), &token_credentials()).with_base_url(format!("{}/v1/send", server.uri()))
}

#[tokio::test]
async fn test_pattern_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send/verify"))
        .and(header("x-api-key", "test-token"))
        .and(body_json(json!({
            "mobile": "09123456789",
            "templateId": "123456",
            "parameters": [
                { "name": "name", "value": "Ali" },
                { "name": "code", "value": "4321" },
            ],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "message": "موفق" })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_pattern(
            &phones(&["09123456789"]),
            "123456",
            &PatternVariables::from([("name", "Ali"), ("code", "4321")]),
            "3000",
        )
        .await
        .unwrap();

    assert!(outcome.successful);
    assert_eq!(outcome.error(), None);
}

#[tokio::test]
async fn test_text_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/send/bulk"))
        .and(body_json(json!({
            "lineNumber": "5000",
            "messageText": "Hello",
            "mobiles": ["0912", "0913"],
            "sendDateTime": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 1 })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912", "0913"]), "Hello", "5000")
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_failure_status_maps_to_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 102 })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hello", "5000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Int(102));
    assert_eq!(outcome.error_message, "اعتبار کافی نمیباشد");
}

#[tokio::test]
async fn test_unknown_status_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 999 })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hello", "5000")
        .await
        .unwrap();

    assert_eq!(
        outcome.error().as_deref(),
        Some("Code 999 - خطای ناشناخته با کد 999 رخ داده است")
    );
}

#[tokio::test]
async fn test_capability_errors() {
    let server = MockServer::start().await;
    let provider = provider(&server);

    let otp = provider.send_otp("0912", "1234", "3000").await.unwrap_err();
    assert_eq!(
        otp.to_string(),
        "Provider \"sms_ir\" does not support sending \"otp\" message, please use \"pattern\" method instead."
    );

    let many = provider
        .send_pattern(&phones(&["0912", "0913"]), "1", &PatternVariables::from([("a", "b")]), "3000")
        .await
        .unwrap_err();
    assert_eq!(
        many.to_string(),
        "Provider \"sms_ir\" only supports sending to one phone number at a time for \"pattern\" message."
    );

    let positional = provider
        .send_pattern(&phones(&["0912"]), "1", &PatternVariables::from(["a", "b"]), "3000")
        .await
        .unwrap_err();
    assert!(matches!(positional, SmsError::InvalidPatternStructure { .. }));
    assert_eq!(
        positional.to_string(),
        "Provider \"sms_ir\" only accepts pattern data as key-value pairs."
    );

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_phone_count_checked_before_variables() {
    let server = MockServer::start().await;

    let error = provider(&server)
        .send_pattern(&phones(&["0912", "0913"]), "1", &PatternVariables::from(["a"]), "3000")
        .await
        .unwrap_err();

    assert!(matches!(error, SmsError::UnsupportedMultiplePhones { .. }));
}

#[tokio::test]
async fn test_credit_not_supported() {
    let server = MockServer::start().await;

    let error = provider(&server).credit().await.unwrap_err();

    assert!(matches!(error, SmsError::NotImplemented { .. }));
}
