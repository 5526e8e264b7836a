use prism::command::{Command, Flow, execute};
use prism::view::render;

use client_core::{PresentationShell, ShellHandle, TranslationClient};

use models::{ModelTier, RequestState, TargetLanguage};

use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRANSLATE_PATH: &str = "/api/v1/translation/translate-text";

fn handle_for(server: &MockServer) -> ShellHandle {
    let client = TranslationClient::new(&server.uri()).unwrap();
    ShellHandle::new(PresentationShell::new(), client)
}

async fn run(handle: &ShellHandle, line: &str) -> Flow {
    let command = Command::parse(line).expect("Line should parse to a command");
    execute(handle, command).await
}

/// **VALUE**: A whole session as typed at the prompt: pick a target, type text,
/// see the translation rendered.
///
/// **BUG THIS CATCHES**: Would catch if the picker selection never reaches the
/// request body, or if the rendered page does not reflect the shell state.
#[tokio::test]
async fn given_typed_session_when_translating_then_target_sent_and_result_rendered() {
    // GIVEN: An API that expects Japanese
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .and(body_partial_json(json!({
            "text": "Good morning",
            "target_language": "ja"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_text": "Good morning",
            "translated_text": "おはようございます",
            "quality_score": 0.95,
            "provider": "openai"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let handle = handle_for(&server);

    // WHEN: Driving the prompt
    assert_eq!(run(&handle, ":lang").await, Flow::Continue(None));
    assert_eq!(run(&handle, ":target ja").await, Flow::Continue(None));
    assert_eq!(run(&handle, ":model advanced").await, Flow::Continue(None));
    run(&handle, "Good morning").await;

    // THEN: State and page agree
    let shell = handle.snapshot().await;
    assert_eq!(shell.target_language(), TargetLanguage::Japanese);
    assert_eq!(shell.model_tier(), ModelTier::Advanced);
    let page = render(&shell);
    assert!(page.contains("おはようございます"));
    assert!(page.contains("Quality: 95%"));
}

#[tokio::test]
async fn given_pdf_attachment_when_sent_then_coming_soon_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let pdf = dir.path().join("report.pdf");
    fs::write(&pdf, b"%PDF-1.7").unwrap();
    let handle = handle_for(&server);

    run(&handle, &format!(":attach {}", pdf.display())).await;
    assert!(handle.snapshot().await.attached_file().is_some());
    run(&handle, ":send").await;

    let shell = handle.snapshot().await;
    assert!(shell.attached_file().is_none());
    assert_eq!(shell.request_state(), &RequestState::Idle);
    assert_eq!(
        shell.notice_message(),
        Some(shell.strings().messages.coming_soon)
    );
}

#[tokio::test]
async fn given_empty_send_when_executed_then_hint_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let handle = handle_for(&server);

    let flow = run(&handle, ":send").await;

    let expected = handle.snapshot().await.strings().messages.empty_input;
    assert_eq!(flow, Flow::Continue(Some(expected.to_string())));
}

#[tokio::test]
async fn given_bad_target_code_when_executed_then_feedback_and_target_unchanged() {
    let server = MockServer::start().await;
    let handle = handle_for(&server);

    let flow = run(&handle, ":target klingon").await;

    assert!(matches!(flow, Flow::Continue(Some(message)) if message.contains("klingon")));
    assert_eq!(
        handle.snapshot().await.target_language(),
        TargetLanguage::Vietnamese
    );
}

#[tokio::test]
async fn given_quit_when_executed_then_flow_quits() {
    let server = MockServer::start().await;
    let handle = handle_for(&server);

    assert_eq!(run(&handle, ":quit").await, Flow::Quit);
}
