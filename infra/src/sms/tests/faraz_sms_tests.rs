use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, phones, token_credentials};
use crate::sms::providers::FarazSmsProvider;

fn provider(server: &MockServer) -> FarazSmsProvider {
    FarazSmsProvider::new(client(), &token_credentials()).with_base_url(format!("{}/v1/api/send", server.uri()))
}

#[tokio::test]
async fn test_pattern_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/api/send"))
        .and(header("Authorization", "test-token"))
        .and(body_json(json!({
            "sending_type": "pattern",
            "from_number": "+983000505",
            "code": "abc123",
            "recipients": ["+989123456789"],
            "params": { "name": "Ali", "code": "1234" },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "message_outbox_ids": [1] },
            "meta": { "status": true, "message": "انجام شد", "message_code": "200-1" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_pattern(
            &phones(&["+989123456789"]),
            "abc123",
            &PatternVariables::from([("name", "Ali"), ("code", "1234")]),
            "+983000505",
        )
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_text_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/api/send"))
        .and(body_json(json!({
            "sending_type": "normal",
            "from_number": "3000",
            "message": "Hello",
            "params": { "recipients": ["0912", "0913"] },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "status": true, "message": "ok", "message_code": "200-1" },
        })))
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
async fn test_failure_uses_meta_block() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "status": false, "message": "شماره فرستنده نامعتبر", "message_code": "400-12" },
        })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hello", "3000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Text("400-12".to_string()));
    assert_eq!(outcome.error().as_deref(), Some("Code 400-12 - شماره فرستنده نامعتبر"));
}

#[tokio::test]
async fn test_pattern_accepts_many_recipients_but_requires_names() {
    let server = MockServer::start().await;

    let error = provider(&server)
        .send_pattern(&phones(&["0912", "0913"]), "p", &PatternVariables::from(["a"]), "3000")
        .await
        .unwrap_err();

    assert!(matches!(error, SmsError::InvalidPatternStructure { .. }));
}

#[tokio::test]
async fn test_otp_unsupported() {
    let server = MockServer::start().await;

    assert!(matches!(
        provider(&server).send_otp("0912", "1", "3000").await,
        Err(SmsError::UnsupportedMethod { .. })
    ));
}
