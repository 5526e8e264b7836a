use crate::helpers::{TRANSLATE_PATH, mount_translate, success_body, unreachable_base_url};

use client_core::TranslationClient;
use client_core::error::TranslationClientError;

use common::HttpStatusCode;
use models::TargetLanguage;

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Pins the outbound contract: method, path, content type and exact body.
///
/// **BUG THIS CATCHES**: Would catch a renamed field, a dropped fixed value
/// (`source_language`, `provider`), or a path that lost its `/api/v1` prefix.
#[tokio::test]
async fn given_text_when_translated_then_posts_contract_body_and_parses_result() {
    // GIVEN: A stub that only matches the exact request body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "text": "Good morning",
            "target_language": "vi",
            "source_language": "en",
            "provider": "openai"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_body("Good morning", "Chào buổi sáng")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = TranslationClient::new(&server.uri()).unwrap();

    // WHEN: Translating
    let result = client
        .translate("Good morning", TargetLanguage::Vietnamese)
        .await
        .unwrap();

    // THEN: Parsed verbatim
    assert_eq!(result.original_text, "Good morning");
    assert_eq!(result.translated_text, "Chào buổi sáng");
    assert_eq!(result.quality_score, 0.87);
    assert_eq!(result.provider, "openai");
}

/// **VALUE**: Deployments behind a path prefix must keep the prefix.
#[tokio::test]
async fn given_base_url_with_path_prefix_when_translated_then_prefix_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/prism{TRANSLATE_PATH}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("a", "b")))
        .expect(1)
        .mount(&server)
        .await;

    let client = TranslationClient::new(&format!("{}/prism", server.uri())).unwrap();

    let result = client.translate("a", TargetLanguage::English).await;

    assert!(result.is_ok(), "Prefixed path should be hit: {result:?}");
}

#[tokio::test]
async fn given_server_error_when_translated_then_server_error_with_status() {
    let server = MockServer::start().await;
    mount_translate(
        &server,
        503,
        json!({ "detail": "upstream unavailable" }),
        Duration::ZERO,
        1,
    )
    .await;
    let client = TranslationClient::new(&server.uri()).unwrap();

    let error = client
        .translate("hello", TargetLanguage::French)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(HttpStatusCode(503)));
    match error {
        TranslationClientError::Server { message, .. } => {
            assert!(message.contains("upstream unavailable"));
        }
        other => panic!("Expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_body_when_translated_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = TranslationClient::new(&server.uri()).unwrap();

    let result = client.translate("hello", TargetLanguage::Thai).await;

    assert!(matches!(result, Err(TranslationClientError::Json { .. })));
}

#[tokio::test]
async fn given_nothing_listening_when_translated_then_http_error() {
    let client = TranslationClient::new(&unreachable_base_url()).unwrap();

    let result = client.translate("hello", TargetLanguage::Spanish).await;

    assert!(matches!(result, Err(TranslationClientError::Http { .. })));
}

/// **VALUE**: Blank text is refused locally, never sent.
#[tokio::test]
async fn given_blank_text_when_translated_then_invalid_request_without_network_call() {
    let server = MockServer::start().await;
    mount_translate(&server, 200, success_body("", ""), Duration::ZERO, 0).await;
    let client = TranslationClient::new(&server.uri()).unwrap();

    let result = client.translate("   ", TargetLanguage::German).await;

    assert!(matches!(
        result,
        Err(TranslationClientError::InvalidRequest { .. })
    ));
}

#[test]
fn given_invalid_base_url_when_client_built_then_url_parse_error() {
    let result = TranslationClient::new("not a url");

    assert!(matches!(result, Err(TranslationClientError::UrlParse { .. })));
}
