use common::ErrorLocation;
use models::FileKind;

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Input problems caught before anything is sent.
#[derive(Debug, ThisError)]
pub enum ValidationError {
    #[error("Empty Input Error: nothing to translate {location}")]
    EmptyInput { location: ErrorLocation },

    #[error("Unsupported File Type Error: {name} ({content_type}) {location}")]
    UnsupportedFileType {
        name: String,
        content_type: String,
        location: ErrorLocation,
    },

    #[error("File Too Large Error: {name} is {size_bytes} bytes (max {max_bytes}) {location}")]
    FileTooLarge {
        name: String,
        size_bytes: u64,
        max_bytes: u64,
        location: ErrorLocation,
    },

    #[error("Unreadable File Error: {path}: {source} {location}")]
    UnreadableFile {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Format Not Yet Supported Error: {kind:?} files cannot be translated yet {location}")]
    FormatNotYetSupported {
        kind: FileKind,
        location: ErrorLocation,
    },
}
