use super::common::{ErrorDetail, HTTPError, HTTPRequestMethod};
use super::http_client::HTTPClient;
use super::http_response::response_common::{decode_body, gateway_code};
use crate::config::{BASE_URL, DEFAULT_TIMEOUT, GatewayConfig};
use crate::credentials::Credentials;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MERCHANT_ID: &str = "300200578";
const PASSCODE: &str = "4BaD82D9197b4cc4b70a221911eE9f70";
const TOKEN: &str = "MzAwMjAwNTc4OjRCYUQ4MkQ5MTk3YjRjYzRiNzBhMjIxOTExZUU5Zjcw";

fn client_for(server: &MockServer) -> HTTPClient {
    let config = GatewayConfig::default().with_base_url(server.uri());
    HTTPClient::new(&Credentials::new(MERCHANT_ID, PASSCODE), &config).unwrap()
}

#[test]
fn test_auth_token_is_base64_of_mid_and_passcode() {
    assert_eq!(Credentials::new(MERCHANT_ID, PASSCODE).auth_token(), TOKEN);
    assert_eq!(Credentials::new("mid", "passcode").auth_token(), "bWlkOnBhc3Njb2Rl");
    assert_eq!(Credentials::new("a", "b").auth_token(), "YTpi");
    assert_eq!(Credentials::new("", "").auth_token(), "Og==");
}

#[test]
fn test_credentials_debug_hides_token() {
    let creds = Credentials::new(MERCHANT_ID, PASSCODE);
    let printed = format!("{creds:?}");
    assert!(printed.contains(MERCHANT_ID));
    assert!(!printed.contains(PASSCODE));
    assert!(!printed.contains(TOKEN));
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = GatewayConfig::default();
    assert_eq!(config.base_url(), BASE_URL);
    assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    assert!(!config.accept_invalid_certs());
    assert!(!config.fail_on_status());

    let config = GatewayConfig::default()
        .with_base_url("http://localhost:8080/api/v1//")
        .with_timeout(Duration::from_secs(5))
        .with_fail_on_status(true);
    assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert!(config.fail_on_status());
}

#[test]
fn test_client_builds_without_certificate_checks() {
    let config = GatewayConfig::default().with_accept_invalid_certs(true);
    assert!(config.accept_invalid_certs());
    let client = HTTPClient::new(&Credentials::new(MERCHANT_ID, PASSCODE), &config).unwrap();
    assert_eq!(client.url(), BASE_URL);
}

#[test]
fn test_method_resolution() {
    assert_eq!(HTTPRequestMethod::resolve(None, false), HTTPRequestMethod::Get);
    assert_eq!(HTTPRequestMethod::resolve(None, true), HTTPRequestMethod::Post);
    assert_eq!(
        HTTPRequestMethod::resolve(Some(HTTPRequestMethod::Delete), false),
        HTTPRequestMethod::Delete
    );
    assert_eq!(HTTPRequestMethod::resolve(Some(HTTPRequestMethod::Put), true), HTTPRequestMethod::Put);
    assert_eq!(
        HTTPRequestMethod::resolve(Some(HTTPRequestMethod::Get), true),
        HTTPRequestMethod::Get
    );
    assert_eq!(HTTPRequestMethod::Delete.to_string(), "DELETE");
}

#[test]
fn test_gateway_code_convention() {
    let ok = StatusCode::OK;
    assert!(decode_body(ok, br#"{"code": 1, "message": "Operation Successful"}"#).is_ok());
    assert!(decode_body(ok, br#"{"code": 0}"#).is_ok());
    assert!(decode_body(ok, br#"{"id": "10000001"}"#).is_ok());
    assert!(decode_body(ok, br"[1, 2, 3]").is_ok());

    let err = decode_body(ok, br#"{"code": 2, "message": "Declined"}"#).unwrap_err();
    assert_eq!(err.code(), 2);
    assert_eq!(err.message(), "Declined");
    assert!(err.is_gateway());

    let err = decode_body(ok, br#"{"code": "19", "message": "Invalid profile"}"#).unwrap_err();
    assert_eq!(err.code(), 19);

    let err = decode_body(ok, br#"{"code": 2.0, "message": "bad"}"#).unwrap_err();
    assert!(err.is_gateway());
    assert_eq!(err.code(), 2);
    assert!(decode_body(ok, br#"{"code": 1.0}"#).is_ok());
    assert!(decode_body(ok, br#"{"code": 1.5}"#).unwrap_err().is_gateway());

    assert!(gateway_code(&json!({"code": "abc"})).is_none());
    assert!(gateway_code(&json!({"message": "x"})).is_none());
}

#[test]
fn test_gateway_error_carries_details() {
    let body = json!({
        "code": 52,
        "category": 1,
        "message": "Invalid card number",
        "reference": "",
        "details": [{"field": "card.number", "message": "Invalid card number"}]
    });
    let raw = serde_json::to_vec(&body).unwrap();
    let err = decode_body(StatusCode::BAD_REQUEST, &raw).unwrap_err();
    assert_eq!(
        err,
        HTTPError::Gateway {
            code: 52,
            message: String::from("Invalid card number"),
            category: Some(1),
            reference: Some(String::new()),
            details: vec![ErrorDetail {
                field: String::from("card.number"),
                message: String::from("Invalid card number"),
            }],
        }
    );
    assert_eq!(err.to_string(), "gateway error 52: Invalid card number");
}

#[test]
fn test_non_json_is_protocol_error_regardless_of_status() {
    for status in [StatusCode::OK, StatusCode::NOT_FOUND, StatusCode::INTERNAL_SERVER_ERROR] {
        let err = decode_body(status, b"<html>Service Unavailable</html>").unwrap_err();
        assert!(err.is_protocol());
        assert_eq!(err.code(), 0);
    }
    assert!(decode_body(StatusCode::OK, b"").unwrap_err().is_protocol());

    let err = decode_body(StatusCode::OK, b"null").unwrap_err();
    assert!(err.is_protocol());
    assert_eq!(err.to_string(), "protocol error 0: Unexpected response format");
}

#[test]
fn test_error_status_without_code_is_transport_error() {
    let err = decode_body(StatusCode::NOT_FOUND, br#"{"message": "not found"}"#).unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.code(), -22);
}

#[tokio::test]
async fn test_dispatch_without_body_is_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/ABC123"))
        .and(header("Authorization", format!("Passcode {TOKEN}").as_str()))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1, "customer_code": "ABC123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.dispatch::<Value>("profiles/ABC123", None, None).await.unwrap();
    assert_eq!(response["customer_code"], "ABC123");
}

#[tokio::test]
async fn test_dispatch_with_body_is_post() {
    let server = MockServer::start().await;
    let body = json!({"amount": 10.5});
    Mock::given(method("POST"))
        .and(path("/payments/10000001/void"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "10000002"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.dispatch("/payments/10000001/void", Some(&body), None).await.unwrap();
    assert_eq!(response["id"], "10000002");
}

#[tokio::test]
async fn test_dispatch_explicit_method_keeps_body() {
    let server = MockServer::start().await;
    let body = json!({"billing": {"name": "Jane Doe"}});
    Mock::given(method("PUT"))
        .and(path("/profiles/ABC123"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/profiles/ABC123"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.dispatch("profiles/ABC123", Some(&body), Some(HTTPRequestMethod::Put)).await.unwrap();
    client.dispatch("profiles/ABC123", Some(&body), Some(HTTPRequestMethod::Delete)).await.unwrap();
}

#[tokio::test]
async fn test_dispatch_surfaces_gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_json(json!({"code": 7, "category": 1, "message": "DECLINE"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.dispatch("payments", Some(&json!({"amount": 1.0})), None).await.unwrap_err();
    assert!(err.is_gateway());
    assert_eq!(err.code(), 7);
    assert_eq!(err.message(), "DECLINE");
}

#[tokio::test]
async fn test_dispatch_non_json_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.dispatch::<Value>("reports", None, None).await.unwrap_err();
    assert_eq!(err, HTTPError::Protocol { message: String::from("Unexpected response format") });
}

#[tokio::test]
async fn test_fail_on_status_rejects_before_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"code": 52, "message": "x"})))
        .mount(&server)
        .await;

    let config = GatewayConfig::default().with_base_url(server.uri()).with_fail_on_status(true);
    let client = HTTPClient::new(&Credentials::new(MERCHANT_ID, PASSCODE), &config).unwrap();
    let err = client.dispatch("payments", Some(&json!({})), None).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.code(), -22);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reports"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 1}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig::default()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = HTTPClient::new(&Credentials::new(MERCHANT_ID, PASSCODE), &config).unwrap();
    let err = client.dispatch::<Value>("reports", None, None).await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.code(), -28);
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    let config = GatewayConfig::default().with_base_url("http://127.0.0.1:9");
    let client = HTTPClient::new(&Credentials::new(MERCHANT_ID, PASSCODE), &config).unwrap();
    let err = client.dispatch::<Value>("payments", None, None).await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.code() < 0);
}
