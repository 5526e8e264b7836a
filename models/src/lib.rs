//! Domain models for PRISM.
//!
//! Pure data: requests and results exchanged with the translation API, the
//! request lifecycle state, attachments, and the enums behind the pickers.
//! Behaviour lives in `client-core`.

pub mod attachment;
pub mod error;
pub mod language;
pub mod translation;

pub use attachment::{AttachedFile, FileKind};
pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use language::{ModelTier, TargetLanguage, UiLanguage};
pub use translation::{
    RequestState, TranslationRequest, TranslationRequestBuilder, TranslationResult,
};

/// Source language sent with every request.
pub const SOURCE_LANGUAGE: &str = "en";

/// Translation provider sent with every request.
pub const PROVIDER: &str = "openai";

/// Maximum number of characters sent in one request.
pub const MAX_TEXT_CHARS: usize = 3_000;

#[cfg(test)]
mod tests;
