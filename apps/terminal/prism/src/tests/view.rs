use crate::view::render;

use client_core::PresentationShell;
use client_core::error::TranslationClientError;

use common::ErrorLocation;
use models::TranslationResult;

use std::panic::Location;

fn succeeded_shell(input: String) -> PresentationShell {
    let mut shell = PresentationShell::new();
    shell.toggle_ui_language();
    shell.set_input(input);
    shell.begin_submit();
    shell.complete_submit(Ok(TranslationResult {
        original_text: String::from("Good morning"),
        translated_text: String::from("Chào buổi sáng"),
        quality_score: 0.934,
        provider: String::from("openai"),
    }));
    shell
}

/// **VALUE**: The first screen shows every static section in the default language.
#[test]
fn given_fresh_shell_when_rendered_then_vietnamese_sections_present() {
    let page = render(&PresentationShell::new());

    assert!(page.contains("PRISM"));
    assert!(page.contains("[EN]"));
    assert!(page.contains("Xin chào"));
    assert!(page.contains("Upload file hoặc paste nội dung để bắt đầu..."));
    assert!(page.contains("Tiêu chuẩn"));
    assert!(page.contains("Dịch đa ngôn ngữ"));
    assert!(page.contains("Khóa học online"));
}

/// **VALUE**: The results panel shows translation, quality and provider as returned.
#[test]
fn given_success_when_rendered_then_result_panel_shows_response() {
    let page = render(&succeeded_shell(String::from("Good morning")));

    assert!(page.contains("Translation:"));
    assert!(page.contains("Chào buổi sáng"));
    assert!(page.contains("Quality: 93%"));
    assert!(page.contains("Provider: openai"));
    assert!(!page.contains("⚠"));
}

#[test]
fn given_truncated_success_when_rendered_then_warning_next_to_result() {
    let page = render(&succeeded_shell("x".repeat(5_000)));

    assert!(page.contains("Chào buổi sáng"));
    assert!(page.contains("only the first 3,000 characters were translated"));
    assert!(page.contains("(5000)"), "Input preview shows the full length");
}

#[test]
fn given_failure_when_rendered_then_generic_message() {
    let mut shell = PresentationShell::new();
    shell.toggle_ui_language();
    shell.set_input("hello");
    shell.begin_submit();
    shell.complete_submit(Err(TranslationClientError::Http {
        message: String::from("timeout"),
        location: ErrorLocation::from(Location::caller()),
    }));

    let page = render(&shell);

    assert!(page.contains("✗ Translation failed. Please try again."));
    assert!(!page.contains("timeout"), "Transport detail stays in the logs");
}

#[test]
fn given_open_dropdowns_when_rendered_then_options_listed() {
    let mut shell = PresentationShell::new();
    shell.toggle_ui_language();
    shell.toggle_language_dropdown();
    shell.toggle_model_dropdown();

    let page = render(&shell);

    assert!(page.contains("Japanese"));
    assert!(page.contains("Thai"));
    assert!(page.contains("✨ Advanced"));
}

#[test]
fn given_in_flight_when_rendered_then_translating_indicator() {
    let mut shell = PresentationShell::new();
    shell.set_input("xin chào");
    shell.begin_submit();

    let page = render(&shell);

    assert!(page.contains("Đang dịch..."));
}
