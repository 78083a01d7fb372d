use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, login_credentials, phones};
use crate::sms::providers::AsanakProvider;

fn provider(server: &MockServer) -> AsanakProvider {
    AsanakProvider::new(client(), &login_credentials()).with_base_url(format!("{}/webservice/v2rest", server.uri()))
}

#[tokio::test]
async fn test_template_request_carries_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webservice/v2rest/template"))
        .and(body_json(json!({
            "username": "user",
            "password": "secret",
            "template_id": "77",
            "destination": "09123456789",
            "parameters": { "code": "1234" },
            "send_to_blacklist": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "status": 200, "message": "OK" },
            "data": { "msgid": 1 },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_pattern(
            &phones(&["09123456789"]),
            "77",
            &PatternVariables::from([("code", "1234")]),
            "3000",
        )
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_text_joins_destinations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webservice/v2rest/sendsms"))
        .and(body_json(json!({
            "username": "user",
            "password": "secret",
            "source": "3000",
            "message": "Hello",
            "destination": "0912,0913",
            "send_to_blacklist": 1,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meta": { "status": 200 } })))
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
async fn test_failure_maps_status_table() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meta": { "status": 1006 } })))
        .mount(&server)
        .await;

    let outcome = provider(&server)
        .send_text(&phones(&["0912"]), "Hello", "3000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Int(1006));
    assert_eq!(outcome.error_message, "خطای مربوط به نداشتن اعتبار کافی برای ارسال");
}

#[tokio::test]
async fn test_pattern_rules() {
    let server = MockServer::start().await;
    let provider = provider(&server);

    assert!(matches!(
        provider
            .send_pattern(&phones(&["0912", "0913"]), "77", &PatternVariables::from([("a", "b")]), "3000")
            .await,
        Err(SmsError::UnsupportedMultiplePhones { .. })
    ));
    assert!(matches!(
        provider
            .send_pattern(&phones(&["0912"]), "77", &PatternVariables::from(["b"]), "3000")
            .await,
        Err(SmsError::InvalidPatternStructure { .. })
    ));
    assert!(matches!(
        provider.send_otp("0912", "1", "3000").await,
        Err(SmsError::UnsupportedMethod { .. })
    ));
}
