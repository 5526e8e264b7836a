pub mod attachment;
pub mod config;
pub mod error;
pub mod locale;
pub mod shell;
pub mod translation_client;

#[cfg(test)]
mod tests;

pub use shell::{PresentationShell, ShellHandle, SubmitOutcome};
pub use translation_client::TranslationClient;

pub const PRISM_API_BASE_URL: &str = "https://web-production-87be0.up.railway.app";
pub const TRANSLATE_TEXT_ENDPOINT: &str = "api/v1/translation/translate-text";
pub const PRISM_USER_AGENT: &str =
    const_format::concatcp!("prism/", env!("CARGO_PKG_VERSION"));

/// Largest attachment accepted by the paperclip button (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
