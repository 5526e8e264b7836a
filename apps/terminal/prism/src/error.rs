use common::ErrorLocation;

use thiserror::Error;

/// Errors that end the terminal session.
///
/// Anything recoverable (validation, failed translations) stays inside the
/// shell state; only startup and I/O problems surface here.
#[derive(Debug, Error)]
pub enum PrismError {
    /// Error from this app (paths, logger, terminal I/O)
    #[error("Prism Error: {message} {location}")]
    Prism {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (client construction, config)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}
