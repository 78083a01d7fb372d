use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use iran_sms_core::domain::value_objects::{ErrorCode, PatternVariables};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;

use super::{client, login_credentials, phones};
use crate::sms::providers::{FaraPayamakProvider, MeliPayamakProvider};

fn meli(server: &MockServer) -> MeliPayamakProvider {
    MeliPayamakProvider::new(client(), &login_credentials()).with_base_url(format!("{}/api/SendSMS", server.uri()))
}

fn fara(server: &MockServer) -> FaraPayamakProvider {
    FaraPayamakProvider::new(client(), &login_credentials()).with_base_url(format!("{}/api/SendSMS", server.uri()))
}

#[tokio::test]
async fn test_pattern_joins_values_with_semicolons() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SendSMS/BaseServiceNumber"))
        .and(body_string_contains("username=user"))
        .and(body_string_contains("password=secret"))
        .and(body_string_contains("to=09123456789"))
        .and(body_string_contains("bodyId=1234"))
        .and(body_string_contains("text=Ali%3B4321"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Value": "5012345678901234567",
            "RetStatus": 1,
            "StrRetStatus": "Ok",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = meli(&server)
        .send_pattern(
            &phones(&["09123456789"]),
            "1234",
            &PatternVariables::from(["Ali", "4321"]),
            "3000",
        )
        .await
        .unwrap();

    assert!(outcome.successful);
}

#[tokio::test]
async fn test_short_value_is_a_failure_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SendSMS/SendSMS"))
        .and(body_string_contains("from=3000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Value": "11", "RetStatus": 0 })))
        .mount(&server)
        .await;

    let outcome = meli(&server)
        .send_text(&phones(&["0912", "0913"]), "Hello", "3000")
        .await
        .unwrap();

    assert!(!outcome.successful);
    assert_eq!(outcome.error_code, ErrorCode::Text("11".to_string()));
    assert_eq!(outcome.error_message, "ارسال نشده");
}

#[tokio::test]
async fn test_unknown_value_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Value": "77" })))
        .mount(&server)
        .await;

    let outcome = fara(&server)
        .send_text(&phones(&["0912"]), "Hello", "3000")
        .await
        .unwrap();

    assert_eq!(outcome.error_message, "خطای ناشناخته با کد 77 رخ داده است");
}

#[tokio::test]
async fn test_driver_names() {
    let server = MockServer::start().await;

    assert_eq!(meli(&server).name(), "meli_payamak");
    assert_eq!(fara(&server).name(), "fara_payamak");
    assert_eq!(meli(&server).default_sender(), "3000");
}

#[tokio::test]
async fn test_otp_unsupported_with_driver_name() {
    let server = MockServer::start().await;

    let error = fara(&server).send_otp("0912", "1", "3000").await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Provider \"fara_payamak\" does not support sending \"otp\" message, please use \"pattern\" method instead."
    );
}

#[tokio::test]
async fn test_pattern_single_phone_only() {
    let server = MockServer::start().await;

    let error = meli(&server)
        .send_pattern(&phones(&["0912", "0913"]), "1", &PatternVariables::from(["a"]), "3000")
        .await
        .unwrap_err();

    assert!(matches!(error, SmsError::UnsupportedMultiplePhones { .. }));
}

#[tokio::test]
async fn test_fara_credit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/SendSMS/GetCredit"))
        .and(body_string_contains("username=user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Value": "2450", "RetStatus": 1 })))
        .mount(&server)
        .await;

    assert_eq!(fara(&server).credit().await.unwrap(), 2450);
}

#[tokio::test]
async fn test_meli_credit_not_supported() {
    let server = MockServer::start().await;

    assert!(matches!(
        meli(&server).credit().await,
        Err(SmsError::NotImplemented { .. })
    ));
}
