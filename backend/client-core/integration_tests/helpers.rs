//! Test helpers for translation integration tests.
//!
//! - Stub translate-text endpoint on a `wiremock` server
//! - Canned API responses
//! - A base URL nothing listens on

use client_core::{PresentationShell, ShellHandle, TranslationClient};

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TRANSLATE_PATH: &str = "/api/v1/translation/translate-text";

pub fn success_body(original: &str, translated: &str) -> Value {
    json!({
        "original_text": original,
        "translated_text": translated,
        "quality_score": 0.87,
        "provider": "openai"
    })
}

/// Mount a translate-text stub that answers `status` with `body` after `delay`.
pub async fn mount_translate(
    server: &MockServer,
    status: u16,
    body: Value,
    delay: Duration,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(TRANSLATE_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(body)
                .set_delay(delay),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn handle_for(base_url: &str) -> ShellHandle {
    let client = TranslationClient::new(base_url).expect("Failed to build client");
    ShellHandle::new(PresentationShell::new(), client)
}

/// Base URL of a port that was bound and released, so connections are refused.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
