use crate::error::translation_client::TranslationClientError;
use crate::shell::{IgnoreReason, Notice, PresentationShell, SubmitOutcome, truncate_chars};

use common::ErrorLocation;
use models::{
    MAX_TEXT_CHARS, ModelTier, RequestState, TargetLanguage, TranslationResult, UiLanguage,
};

use std::panic::Location;

fn sample_result() -> TranslationResult {
    TranslationResult {
        original_text: String::from("hello world"),
        translated_text: String::from("xin chào thế giới"),
        quality_score: 0.91,
        provider: String::from("openai"),
    }
}

fn transport_error() -> TranslationClientError {
    TranslationClientError::Http {
        message: String::from("connection refused"),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn dispatched(outcome: SubmitOutcome) -> models::TranslationRequest {
    match outcome {
        SubmitOutcome::Dispatched(request) => request,
        other => panic!("Expected Dispatched, got {other:?}"),
    }
}

/// **VALUE**: Blank input must never produce a request.
///
/// **BUG THIS CATCHES**: Would catch if whitespace-only text slips past the guard
/// and the page fires an empty translation at the API.
#[test]
fn given_whitespace_input_and_no_file_when_submitted_then_ignored_and_idle() {
    // GIVEN: Whitespace-only input
    let mut shell = PresentationShell::new();
    shell.set_input("   \n\t");

    // WHEN: Submitting
    let outcome = shell.begin_submit();

    // THEN: Nothing happens
    assert_eq!(outcome, SubmitOutcome::Ignored(IgnoreReason::EmptyInput));
    assert_eq!(shell.request_state(), &RequestState::Idle);
    assert!(!shell.can_submit());
    assert!(shell.notice().is_none());
}

/// **VALUE**: The happy path: Idle → InFlight → Succeeded with the result stored verbatim.
#[test]
fn given_text_when_submit_succeeds_then_result_stored_verbatim() {
    // GIVEN: Some text and a chosen target
    let mut shell = PresentationShell::new();
    shell.select_target_language(TargetLanguage::Japanese);
    shell.set_input("hello world");

    // WHEN: Beginning the submit
    let request = dispatched(shell.begin_submit());

    // THEN: The request carries the input and the shell is in flight
    assert_eq!(request.text(), "hello world");
    assert_eq!(request.target_language(), TargetLanguage::Japanese);
    assert!(shell.request_state().is_in_flight());
    assert!(!shell.can_submit());

    // WHEN: The client answers
    shell.complete_submit(Ok(sample_result()));

    // THEN: Result shown exactly as parsed
    assert_eq!(shell.result(), Some(&sample_result()));
    assert!(shell.warning_message().is_none());
}

/// **VALUE**: Transport failures collapse into one localized message and clear the result.
#[test]
fn given_previous_result_when_next_submit_fails_then_failed_with_generic_message() {
    // GIVEN: A shell that already shows a result
    let mut shell = PresentationShell::new();
    shell.toggle_ui_language();
    shell.set_input("first");
    dispatched(shell.begin_submit());
    shell.complete_submit(Ok(sample_result()));

    // WHEN: Submitting again
    shell.set_input("second");
    dispatched(shell.begin_submit());

    // THEN: The old result is cleared before the response arrives
    assert_eq!(shell.request_state(), &RequestState::InFlight);
    assert!(shell.result().is_none());

    // WHEN: The request fails
    shell.complete_submit(Err(transport_error()));

    // THEN: Generic English message, no result
    assert_eq!(shell.request_state(), &RequestState::Failed);
    assert_eq!(
        shell.error_message(),
        Some("Translation failed. Please try again.")
    );
    assert!(shell.result().is_none());
}

/// **VALUE**: Only one request may be in flight.
///
/// **BUG THIS CATCHES**: Would catch if the InFlight guard is dropped and a double
/// click sends two requests.
#[test]
fn given_in_flight_when_submitted_again_then_ignored() {
    let mut shell = PresentationShell::new();
    shell.set_input("hello");
    dispatched(shell.begin_submit());

    let second = shell.begin_submit();

    assert_eq!(second, SubmitOutcome::Ignored(IgnoreReason::InFlight));
    assert!(shell.request_state().is_in_flight());
}

/// **VALUE**: Over-long input is cut to the limit, not rejected, and the warning stays
/// visible next to the translation.
#[test]
fn given_5000_chars_when_submitted_then_request_has_3000_and_warning_survives_result() {
    // GIVEN: 5,000 characters of input
    let mut shell = PresentationShell::new();
    shell.set_input("a".repeat(5_000));

    // WHEN: Submitting and receiving a result
    let request = dispatched(shell.begin_submit());
    shell.complete_submit(Ok(sample_result()));

    // THEN: Exactly 3,000 characters were sent and the warning is shown with the result
    assert_eq!(request.text().chars().count(), 3_000);
    assert!(shell.result().is_some());
    assert_eq!(
        shell.warning_message(),
        Some(shell.strings().messages.truncation_warning)
    );
}

#[test]
fn given_warning_when_next_submit_fits_then_warning_cleared() {
    let mut shell = PresentationShell::new();
    shell.set_input("a".repeat(MAX_TEXT_CHARS + 1));
    dispatched(shell.begin_submit());
    shell.complete_submit(Ok(sample_result()));
    assert!(shell.warning_message().is_some());

    shell.set_input("short");
    dispatched(shell.begin_submit());

    assert!(shell.warning_message().is_none());
}

/// **VALUE**: A text file's contents become the request text.
#[test]
fn given_text_file_hello_world_when_submitted_then_request_text_matches() {
    // GIVEN: A small text attachment and no typed text
    let mut shell = PresentationShell::new();
    let accepted = shell.attach_bytes("greeting.txt", "text/plain", b"hello world");

    // WHEN: Submitting
    let request = dispatched(shell.begin_submit());

    // THEN: The file contents were sent
    assert!(accepted);
    assert_eq!(request.text(), "hello world");
    assert_eq!(shell.attached_file().map(|f| f.name.as_str()), Some("greeting.txt"));
}

/// **VALUE**: Disallowed types never become the attachment and never touch the lifecycle.
#[test]
fn given_png_when_attached_then_validation_notice_and_no_attachment() {
    // GIVEN: A fresh shell
    let mut shell = PresentationShell::new();

    // WHEN: Selecting an image
    let accepted = shell.attach_bytes("photo.png", "image/png", &[0x89, 0x50, 0x4e, 0x47]);

    // THEN: Rejected with a notice, nothing attached, still Idle
    assert!(!accepted);
    assert!(shell.attached_file().is_none());
    assert_eq!(shell.notice(), Some(Notice::UnsupportedFileType));
    assert_eq!(shell.request_state(), &RequestState::Idle);
}

/// **VALUE**: PDF/DOCX are accepted at selection but blocked at submit with "coming soon".
///
/// **BUG THIS CATCHES**: Would catch if binary documents were sent to the text endpoint.
#[test]
fn given_pdf_attachment_when_submitted_then_coming_soon_and_file_removed() {
    let mut shell = PresentationShell::new();
    assert!(shell.attach_bytes("report.pdf", "application/pdf", b"%PDF-1.7"));
    assert!(shell.can_submit());

    let outcome = shell.begin_submit();

    assert_eq!(outcome, SubmitOutcome::Rejected(Notice::ComingSoon));
    assert!(shell.attached_file().is_none());
    assert_eq!(shell.request_state(), &RequestState::Idle);
    assert_eq!(
        shell.notice_message(),
        Some(shell.strings().messages.coming_soon)
    );
}

#[test]
fn given_long_text_file_when_attached_then_warning_set_on_submit() {
    let mut shell = PresentationShell::new();
    let contents = "b".repeat(MAX_TEXT_CHARS + 500);
    assert!(shell.attach_bytes("long.txt", "text/plain", contents.as_bytes()));

    let request = dispatched(shell.begin_submit());

    assert_eq!(request.text().chars().count(), MAX_TEXT_CHARS);
    assert!(shell.warning_message().is_some());
}

#[test]
fn given_outcome_without_request_when_completed_then_state_unchanged() {
    let mut shell = PresentationShell::new();

    shell.complete_submit(Ok(sample_result()));

    assert_eq!(shell.request_state(), &RequestState::Idle);
}

#[test]
fn given_dropdowns_when_selecting_then_value_set_and_dropdown_closed() {
    let mut shell = PresentationShell::new();

    shell.toggle_model_dropdown();
    assert!(shell.is_model_dropdown_open());
    shell.select_model(ModelTier::Advanced);
    assert_eq!(shell.model_tier(), ModelTier::Advanced);
    assert!(!shell.is_model_dropdown_open());

    shell.toggle_language_dropdown();
    assert!(shell.is_language_dropdown_open());
    shell.select_target_language(TargetLanguage::Korean);
    assert_eq!(shell.target_language(), TargetLanguage::Korean);
    assert!(!shell.is_language_dropdown_open());

    shell.toggle_ui_language();
    assert_eq!(shell.ui_language(), UiLanguage::English);
    assert_eq!(shell.preferences().model_tier, ModelTier::Advanced);
}

#[test]
fn given_multibyte_text_when_truncated_then_cut_on_char_boundary() {
    let (kept, truncated) = truncate_chars("chào bạn", 4);
    assert_eq!(kept, "chào");
    assert!(truncated);

    let (kept, truncated) = truncate_chars("chào", 4);
    assert_eq!(kept, "chào");
    assert!(!truncated);
}

/// **VALUE**: The failure message follows the page language like every other string.
///
/// **BUG THIS CATCHES**: Would catch if the message were frozen in the language
/// active when the request failed.
#[test]
fn given_failed_request_when_ui_language_toggled_then_message_in_new_language() {
    // GIVEN: A request that failed while the page was in Vietnamese
    let mut shell = PresentationShell::new();
    shell.set_input("hello");
    dispatched(shell.begin_submit());
    shell.complete_submit(Err(transport_error()));
    assert_eq!(shell.error_message(), Some("Dịch thất bại. Vui lòng thử lại."));

    // WHEN: Switching the page to English
    shell.toggle_ui_language();

    // THEN: The failure is shown in English
    assert_eq!(shell.ui_language(), UiLanguage::English);
    assert_eq!(
        shell.error_message(),
        Some("Translation failed. Please try again.")
    );
}

/// **VALUE**: The submit control is only enabled when a submit would do something.
///
/// **BUG THIS CATCHES**: Would catch an empty text file enabling a control that
/// then silently ignores the press.
#[test]
fn given_empty_text_file_when_checking_submit_then_disabled_and_ignored() {
    // GIVEN: An empty .txt attachment and no typed text
    let mut shell = PresentationShell::new();
    assert!(shell.attach_bytes("empty.txt", "text/plain", b""));

    // THEN: The control is disabled and pressing it changes nothing
    assert!(!shell.can_submit());
    assert_eq!(
        shell.begin_submit(),
        SubmitOutcome::Ignored(IgnoreReason::EmptyInput)
    );
    assert_eq!(shell.request_state(), &RequestState::Idle);
}

/// **VALUE**: Leading blanks do not count against the character limit.
///
/// **BUG THIS CATCHES**: Would catch real text being cut off behind thousands of
/// leading spaces and the page reporting "enter some text".
#[test]
fn given_long_leading_whitespace_when_submitted_then_text_sent_without_warning() {
    // GIVEN: More blank characters than the limit, followed by real text
    let mut shell = PresentationShell::new();
    shell.set_input(format!("{}hello", " ".repeat(MAX_TEXT_CHARS + 10)));
    assert!(shell.can_submit());

    // WHEN: Submitting
    let request = dispatched(shell.begin_submit());

    // THEN: The text is sent and nothing was truncated
    assert_eq!(request.text(), "hello");
    assert!(shell.warning_message().is_none());
    assert!(shell.notice().is_none());
}
