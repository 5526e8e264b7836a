use crate::helpers::{handle_for, mount_translate, success_body, unreachable_base_url};

use client_core::config::AppConfig;
use client_core::error::CoreError;
use client_core::shell::IgnoreReason;
use client_core::{ShellHandle, SubmitOutcome};

use models::{RequestState, TargetLanguage, UiLanguage};

use serde_json::json;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::MockServer;

/// **VALUE**: End-to-end success through the real client: the displayed result is the
/// API response verbatim.
#[tokio::test]
async fn given_input_when_submitted_then_succeeded_with_response() {
    // GIVEN: A stub API and a handle with input
    let server = MockServer::start().await;
    mount_translate(
        &server,
        200,
        success_body("hello", "xin chào"),
        Duration::ZERO,
        1,
    )
    .await;
    let handle = handle_for(&server.uri());
    handle.update(|shell| shell.set_input("hello")).await;

    // WHEN: Submitting
    let outcome = handle.submit().await;

    // THEN: Sent once, result shown
    assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
    let shell = handle.snapshot().await;
    let result = shell.result().expect("Should have a result");
    assert_eq!(result.translated_text, "xin chào");
    assert_eq!(result.quality_score, 0.87);
}

/// **VALUE**: Whitespace input costs nothing: no state change, no network call.
#[tokio::test]
async fn given_whitespace_input_when_submitted_then_no_network_call() {
    let server = MockServer::start().await;
    mount_translate(&server, 200, success_body("", ""), Duration::ZERO, 0).await;
    let handle = handle_for(&server.uri());
    handle.update(|shell| shell.set_input(" \t ")).await;

    let outcome = handle.submit().await;

    assert_eq!(outcome, SubmitOutcome::Ignored(IgnoreReason::EmptyInput));
    assert_eq!(handle.snapshot().await.request_state(), &RequestState::Idle);
}

/// **VALUE**: Any non-2xx ends in Failed with the generic message and no result.
#[tokio::test]
async fn given_server_error_when_submitted_then_failed_and_result_cleared() {
    let server = MockServer::start().await;
    mount_translate(&server, 500, json!({}), Duration::ZERO, 1).await;
    let handle = handle_for(&server.uri());
    handle.update(|shell| shell.set_input("hello")).await;

    handle.submit().await;

    let shell = handle.snapshot().await;
    assert!(shell.result().is_none());
    assert_eq!(
        shell.error_message(),
        Some(shell.strings().messages.translation_failed)
    );
}

#[tokio::test]
async fn given_unreachable_api_when_submitted_then_failed_and_page_still_usable() {
    let handle = handle_for(&unreachable_base_url());
    handle.update(|shell| shell.set_input("hello")).await;

    handle.submit().await;

    let shell = handle.snapshot().await;
    assert!(matches!(shell.request_state(), RequestState::Failed));
    assert!(shell.can_submit(), "Failure must leave the page interactive");
}

/// **VALUE**: The single-flight rule holds even when the second submit arrives while
/// the first is still awaiting the network.
///
/// **BUG THIS CATCHES**: Would catch if the lock were held across the request (the
/// second submit would queue and then send) or if the InFlight guard were lost.
#[tokio::test]
async fn given_request_in_flight_when_submitted_again_then_second_ignored() {
    // GIVEN: A slow API
    let server = MockServer::start().await;
    mount_translate(
        &server,
        200,
        success_body("hello", "xin chào"),
        Duration::from_millis(300),
        1,
    )
    .await;
    let handle = handle_for(&server.uri());
    handle.update(|shell| shell.set_input("hello")).await;

    // WHEN: Submitting twice, the second while the first is outstanding
    let second_handle = handle.clone();
    let (first, second) = tokio::join!(handle.submit(), async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let in_flight = second_handle.snapshot().await.request_state().is_in_flight();
        (in_flight, second_handle.submit().await)
    });

    // THEN: One request, the second submit was a no-op
    assert!(matches!(first, SubmitOutcome::Dispatched(_)));
    assert!(second.0, "First request should still be in flight");
    assert_eq!(second.1, SubmitOutcome::Ignored(IgnoreReason::InFlight));
    assert!(handle.snapshot().await.result().is_some());
}

/// **VALUE**: A text file on disk flows through to the request body unchanged.
#[tokio::test]
async fn given_text_file_when_attached_and_submitted_then_request_text_is_file_contents() {
    let server = MockServer::start().await;
    mount_translate(
        &server,
        200,
        success_body("hello world", "xin chào thế giới"),
        Duration::ZERO,
        1,
    )
    .await;
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("hello.txt");
    fs::write(&file_path, "hello world").unwrap();
    let handle = handle_for(&server.uri());

    assert!(handle.attach_path(&file_path).await);
    let outcome = handle.submit().await;

    match outcome {
        SubmitOutcome::Dispatched(request) => assert_eq!(request.text(), "hello world"),
        other => panic!("Expected Dispatched, got {other:?}"),
    }
    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["text"], "hello world");
}

/// **VALUE**: 5,000 characters in, exactly 3,000 on the wire, warning beside the result.
#[tokio::test]
async fn given_5000_chars_when_submitted_then_3000_sent_and_warning_shown() {
    let server = MockServer::start().await;
    mount_translate(&server, 200, success_body("a", "b"), Duration::ZERO, 1).await;
    let handle = handle_for(&server.uri());
    handle.update(|shell| shell.set_input("z".repeat(5_000))).await;

    handle.submit().await;

    let received = server.received_requests().await.unwrap_or_default();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["text"].as_str().map(|t| t.chars().count()), Some(3_000));

    let shell = handle.snapshot().await;
    assert!(shell.result().is_some());
    assert!(shell.warning_message().is_some());
}

#[tokio::test]
async fn given_png_path_when_attached_then_rejected_and_idle() {
    let server = MockServer::start().await;
    mount_translate(&server, 200, success_body("", ""), Duration::ZERO, 0).await;
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("photo.png");
    fs::write(&image, [0x89, 0x50, 0x4e, 0x47]).unwrap();
    let handle = handle_for(&server.uri());

    let accepted = handle.attach_path(&image).await;

    let shell = handle.snapshot().await;
    assert!(!accepted);
    assert!(shell.attached_file().is_none());
    assert!(shell.notice_message().is_some());
    assert_eq!(shell.request_state(), &RequestState::Idle);
}

/// **VALUE**: A session built from config talks to the configured API and starts
/// with the saved picker selections.
#[tokio::test]
async fn given_config_when_session_started_then_preferences_restored_and_api_used() {
    // GIVEN: Config pointing at a stub API with saved preferences
    let server = MockServer::start().await;
    mount_translate(
        &server,
        200,
        success_body("hello", "こんにちは"),
        Duration::ZERO,
        1,
    )
    .await;
    let mut config = AppConfig::default();
    config.api.base_url = server.uri();
    config.ui.language = UiLanguage::English;
    config.ui.target_language = TargetLanguage::Japanese;

    // WHEN: Starting the session and submitting
    let handle = ShellHandle::from_config(&config).expect("Config should be valid");
    handle.update(|shell| shell.set_input("hello")).await;
    handle.submit().await;

    // THEN: Preferences were restored and the stub answered
    let shell = handle.snapshot().await;
    assert_eq!(shell.preferences(), config.ui);
    assert_eq!(
        shell.result().map(|r| r.translated_text.as_str()),
        Some("こんにちは")
    );
}

/// **BUG THIS CATCHES**: Would catch a bad env override reaching the client and
/// failing only at the first submit.
#[test]
fn given_non_http_base_url_when_session_started_then_config_error() {
    let mut config = AppConfig::default();
    config.apply_base_url_override(Some(String::from("ftp://example.com")));

    let result = ShellHandle::from_config(&config);

    assert!(matches!(result, Err(CoreError::Config(_))));
}
