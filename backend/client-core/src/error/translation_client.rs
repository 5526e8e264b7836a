use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures of the single translate-text call.
///
/// The shell shows one message for all of these; the variants exist for logs.
#[derive(Debug, ThisError)]
pub enum TranslationClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Request Error: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} ({category}) - {message} {location}", category = .status.category())]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl TranslationClientError {
    /// Status code returned by the API, if the request got that far.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            TranslationClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ModelError> for TranslationClientError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        TranslationClientError::InvalidRequest {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for TranslationClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TranslationClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for TranslationClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if error.is_decode() {
            return TranslationClientError::Json {
                message: error.to_string(),
                location,
            };
        }

        TranslationClientError::Http {
            message: error.to_string(),
            location,
        }
    }
}

impl From<serde_json::Error> for TranslationClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        TranslationClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
