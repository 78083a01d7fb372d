use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, MessageType, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, phones, token_credentials};
use crate::sms::providers::WebOneProvider;

fn provider(server: &MockServer) -> WebOneProvider {
    WebOneProvider::new(client(), &token_credentials()).with_base_url(format!("{}/api/v1", server.uri()))
}

#[tokio::test]
async fn test_otp_uses_smart_otp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/SMS/SmartOTP"))
        .and(header("X-API-KEY", "test-token"))
        .and(body_json(json!({ "ToNumber": "09123456789", "Content": "Code: 1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "succeeded": true, "resultCode": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_otp("09123456789", "Code: 1234", "3000")
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_text_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/SMS/Send"))
        .and(body_json(json!({ "From": "3000", "ToNumbers": ["0912", "0913"], "Content": "Hi" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "succeeded": true, "resultCode": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912", "0913"]), "Hi", "3000")
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_failure_maps_result_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "succeeded": false, "resultCode": 8 })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hi", "3000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Int(8));
    assert_eq!(outcome.error_message, "اعتبار كافي نيست");
}

#[tokio::test]
async fn test_pattern_points_to_text() {
    let server = MockServer::start().await;

    let error = provider(&server)
        .send_pattern(&phones(&["0912"]), "1", &PatternVariables::from([("a", "b")]), "3000")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        SmsError::UnsupportedMethod {
            method: MessageType::Pattern,
            alternative: MessageType::Text,
            ..
        }
    ));
}

#[tokio::test]
async fn test_credit_plain_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/SMS/GetCredit"))
        .and(header("X-API-KEY", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("48250"))
        .mount(&server)
        .await;

    assert_eq!(provider(&server).credit().await.unwrap(), 48250);
}
