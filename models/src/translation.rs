//! Wire types for the translate-text endpoint and the request lifecycle state.

use crate::{ErrorLocation, MAX_TEXT_CHARS, ModelError, PROVIDER, SOURCE_LANGUAGE, TargetLanguage};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/translation/translate-text`.
///
/// Built once per submit through [`TranslationRequestBuilder`] and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    text: String,
    target_language: TargetLanguage,
    source_language: String,
    provider: String,
}

impl TranslationRequest {
    pub fn builder() -> TranslationRequestBuilder {
        TranslationRequestBuilder::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn target_language(&self) -> TargetLanguage {
        self.target_language
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Builder for validated [`TranslationRequest`] instances.
///
/// Source language and provider are fixed; only text and target vary.
#[derive(Debug, Default)]
pub struct TranslationRequestBuilder {
    text: Option<String>,
    target_language: Option<TargetLanguage>,
}

impl TranslationRequestBuilder {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_target_language(mut self, target_language: TargetLanguage) -> Self {
        self.target_language = Some(target_language);
        self
    }

    /// Build the request, rejecting blank or over-long text.
    ///
    /// Callers are expected to truncate to [`MAX_TEXT_CHARS`] first.
    #[track_caller]
    pub fn build(self) -> Result<TranslationRequest, ModelError> {
        let text = self.text.ok_or_else(|| ModelError::Validation {
            message: String::from("Text is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if text.trim().is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Text cannot be blank"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let char_count = text.chars().count();
        if char_count > MAX_TEXT_CHARS {
            return Err(ModelError::Validation {
                message: format!("Text has {char_count} characters (max {MAX_TEXT_CHARS})"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(TranslationRequest {
            text,
            target_language: self.target_language.unwrap_or_default(),
            source_language: SOURCE_LANGUAGE.to_string(),
            provider: PROVIDER.to_string(),
        })
    }
}

/// Parsed response of a successful translation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    /// Normalized confidence in `[0, 1]`.
    pub quality_score: f64,
    pub provider: String,
}

impl TranslationResult {
    pub fn quality_percent(&self) -> u8 {
        (self.quality_score.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Lifecycle of the single translation request the page allows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded(TranslationResult),
    /// The cause is logged; the page shows a localized generic message.
    Failed,
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, RequestState::InFlight)
    }

    pub fn result(&self) -> Option<&TranslationResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed)
    }
}
