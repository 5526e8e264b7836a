//! UI state of the translation page and the request lifecycle.
//!
//! `PresentationShell` is a plain state container: every control on the page
//! maps to one method, and submitting is split into [`PresentationShell::begin_submit`]
//! and [`PresentationShell::complete_submit`] so the await point sits outside any
//! borrow. [`ShellHandle`] wires both halves to a [`crate::TranslationClient`].
//!
//! # Lifecycle
//!
//! ```text
//! Idle | Succeeded | Failed --submit--> InFlight --ok--> Succeeded
//!                                               \--err--> Failed
//! ```
//!
//! Submitting while `InFlight` or with nothing to translate is ignored.

mod handle;

pub use handle::ShellHandle;

use crate::attachment::{self, LoadedAttachment};
use crate::config::UiPreferences;
use crate::error::translation_client::TranslationClientError;
use crate::error::validation::ValidationError;
use crate::locale::{self, Strings};

use common::ErrorLocation;
use models::{
    AttachedFile, MAX_TEXT_CHARS, ModelTier, RequestState, TargetLanguage, TranslationRequest,
    TranslationResult, UiLanguage,
};

use std::panic::Location;

use log::{debug, info, warn};

/// Inline message shown under the input. Localized at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    UnsupportedFileType,
    FileTooLarge,
    UnreadableFile,
    ComingSoon,
}

impl Notice {
    pub fn message(&self, strings: &Strings) -> &'static str {
        let messages = &strings.messages;
        match self {
            Notice::EmptyInput => messages.empty_input,
            Notice::UnsupportedFileType => messages.unsupported_file_type,
            Notice::FileTooLarge => messages.file_too_large,
            Notice::UnreadableFile => messages.unreadable_file,
            Notice::ComingSoon => messages.coming_soon,
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(error: &ValidationError) -> Self {
        match error {
            ValidationError::EmptyInput { .. } => Notice::EmptyInput,
            ValidationError::UnsupportedFileType { .. } => Notice::UnsupportedFileType,
            ValidationError::FileTooLarge { .. } => Notice::FileTooLarge,
            ValidationError::UnreadableFile { .. } => Notice::UnreadableFile,
            ValidationError::FormatNotYetSupported { .. } => Notice::ComingSoon,
        }
    }
}

/// Why a submit did nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    InFlight,
    EmptyInput,
}

/// Result of pressing the submit control.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// No state changed and nothing was sent.
    Ignored(IgnoreReason),
    /// Validation failed; a notice is set and nothing was sent.
    Rejected(Notice),
    /// The shell is now `InFlight`; the request must be sent and completed.
    Dispatched(TranslationRequest),
}

/// Everything the translation page displays.
#[derive(Debug, Clone, Default)]
pub struct PresentationShell {
    ui_language: UiLanguage,
    target_language: TargetLanguage,
    model_tier: ModelTier,
    show_model_dropdown: bool,
    show_language_dropdown: bool,
    input_text: String,
    input_truncated: bool,
    attached_file: Option<AttachedFile>,
    request_state: RequestState,
    truncation_warning: bool,
    notice: Option<Notice>,
}

impl PresentationShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from saved preferences.
    pub fn with_preferences(preferences: &UiPreferences) -> Self {
        Self {
            ui_language: preferences.language,
            target_language: preferences.target_language,
            model_tier: preferences.model_tier,
            ..Self::default()
        }
    }

    // ============================================
    // READS
    // ============================================

    pub fn ui_language(&self) -> UiLanguage {
        self.ui_language
    }

    pub fn strings(&self) -> &'static Strings {
        locale::strings(self.ui_language)
    }

    pub fn target_language(&self) -> TargetLanguage {
        self.target_language
    }

    pub fn model_tier(&self) -> ModelTier {
        self.model_tier
    }

    pub fn is_model_dropdown_open(&self) -> bool {
        self.show_model_dropdown
    }

    pub fn is_language_dropdown_open(&self) -> bool {
        self.show_language_dropdown
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn attached_file(&self) -> Option<&AttachedFile> {
        self.attached_file.as_ref()
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request_state
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        self.request_state.result()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Localized inline validation message, if any.
    pub fn notice_message(&self) -> Option<&'static str> {
        self.notice.map(|notice| notice.message(self.strings()))
    }

    /// Localized failure message while the last request failed.
    pub fn error_message(&self) -> Option<&'static str> {
        self.request_state
            .is_failed()
            .then(|| self.strings().messages.translation_failed)
    }

    /// Localized truncation warning, kept alongside the result.
    pub fn warning_message(&self) -> Option<&'static str> {
        self.truncation_warning
            .then(|| self.strings().messages.truncation_warning)
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        let has_document = self
            .attached_file
            .as_ref()
            .is_some_and(|file| !file.kind.is_text());

        !self.request_state.is_in_flight() && (has_document || !self.source_text().is_empty())
    }

    /// Current preferences, for saving back to config.
    pub fn preferences(&self) -> UiPreferences {
        UiPreferences {
            language: self.ui_language,
            target_language: self.target_language,
            model_tier: self.model_tier,
        }
    }

    // ============================================
    // CONTROLS
    // ============================================

    pub fn toggle_ui_language(&mut self) {
        self.ui_language = self.ui_language.toggled();
        debug!("UI language switched to {}", self.ui_language.code());
    }

    pub fn toggle_model_dropdown(&mut self) {
        self.show_model_dropdown = !self.show_model_dropdown;
    }

    pub fn select_model(&mut self, tier: ModelTier) {
        self.model_tier = tier;
        self.show_model_dropdown = false;
    }

    pub fn toggle_language_dropdown(&mut self) {
        self.show_language_dropdown = !self.show_language_dropdown;
    }

    pub fn select_target_language(&mut self, language: TargetLanguage) {
        self.target_language = language;
        self.show_language_dropdown = false;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.input_truncated = false;
        self.notice = None;
    }

    pub fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    /// Accept a validated attachment. Text files replace the input with their contents.
    pub fn attach(&mut self, loaded: LoadedAttachment) {
        let LoadedAttachment { file, truncated } = loaded;

        if let Some(text) = &file.extracted_text {
            self.input_text = text.clone();
            self.input_truncated = truncated;
        }

        info!("Attachment set: {} ({:?})", file.name, file.kind);
        self.attached_file = Some(file);
        self.notice = None;
    }

    /// Record a rejected selection. The current attachment and request state are untouched.
    pub fn reject_attachment(&mut self, error: &ValidationError) {
        warn!("Attachment rejected: {error}");
        self.notice = Some(Notice::from(error));
    }

    /// Validate and attach an in-memory file.
    ///
    /// Returns `true` if the file was accepted.
    pub fn attach_bytes(&mut self, name: &str, content_type: &str, bytes: &[u8]) -> bool {
        match attachment::from_bytes(name, content_type, bytes) {
            Ok(loaded) => {
                self.attach(loaded);
                true
            }
            Err(error) => {
                self.reject_attachment(&error);
                false
            }
        }
    }

    pub fn remove_attachment(&mut self) {
        if let Some(file) = self.attached_file.take() {
            debug!("Attachment removed: {}", file.name);
        }
    }

    // ============================================
    // REQUEST LIFECYCLE
    // ============================================

    /// Validate the current input and, if it can be sent, enter `InFlight`.
    ///
    /// Prior result and error are cleared before the request is returned.
    #[track_caller]
    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.request_state.is_in_flight() {
            debug!("Submit ignored: request already in flight");
            return SubmitOutcome::Ignored(IgnoreReason::InFlight);
        }

        if let Some(kind) = self
            .attached_file
            .as_ref()
            .map(|file| file.kind)
            .filter(|kind| !kind.is_text())
        {
            let error = ValidationError::FormatNotYetSupported {
                kind,
                location: ErrorLocation::from(Location::caller()),
            };
            warn!("{error}");
            self.attached_file = None;
            self.notice = Some(Notice::from(&error));
            return SubmitOutcome::Rejected(Notice::ComingSoon);
        }

        let source = self.source_text();
        if source.is_empty() {
            debug!(
                "Submit ignored: {}",
                ValidationError::EmptyInput {
                    location: ErrorLocation::from(Location::caller()),
                }
            );
            return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
        }

        let (text, truncated) = truncate_chars(source, MAX_TEXT_CHARS);
        let request = match TranslationRequest::builder()
            .with_text(text)
            .with_target_language(self.target_language)
            .build()
        {
            Ok(request) => request,
            Err(error) => {
                warn!("Submit rejected: {error}");
                self.notice = Some(Notice::EmptyInput);
                return SubmitOutcome::Rejected(Notice::EmptyInput);
            }
        };

        if truncated {
            info!("Input truncated to {MAX_TEXT_CHARS} characters before sending");
        }

        self.truncation_warning = truncated || self.input_truncated;
        self.notice = None;
        self.request_state = RequestState::InFlight;

        SubmitOutcome::Dispatched(request)
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    pub fn complete_submit(&mut self, outcome: Result<TranslationResult, TranslationClientError>) {
        if !self.request_state.is_in_flight() {
            warn!("Translation outcome arrived while no request was in flight; dropping it");
            return;
        }

        self.request_state = match outcome {
            Ok(result) => {
                info!(
                    "Translation succeeded ({} chars, quality {:.2}, provider {})",
                    result.translated_text.chars().count(),
                    result.quality_score,
                    result.provider
                );
                RequestState::Succeeded(result)
            }
            Err(error) => {
                warn!("Translation failed: {error}");
                RequestState::Failed
            }
        };
    }

    /// Text a submit would send: the input, else the attached file's text.
    ///
    /// Trimmed so leading blanks never eat into the character limit.
    fn source_text(&self) -> &str {
        let input = self.input_text.trim();
        if !input.is_empty() {
            return input;
        }

        self.attached_file
            .as_ref()
            .and_then(|file| file.extracted_text.as_deref())
            .map(str::trim)
            .unwrap_or_default()
    }
}

/// Keep at most `max_chars` characters of `text`.
///
/// Returns the kept text and whether anything was dropped.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}
