pub mod config;
pub mod translation_client;
pub mod validation;

pub use translation_client::TranslationClientError;
pub use validation::ValidationError;

use thiserror::Error;

/// Errors from setting up a session.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    TranslationClient(#[from] translation_client::TranslationClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
