use client_core::error::{CoreError, TranslationClientError, ValidationError};

use common::{ErrorLocation, HttpStatusCode};

use std::error::Error;
use std::io::{Error as IoError, ErrorKind};
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Server errors carry status and category into the log line.
///
/// **BUG THIS CATCHES**: Would catch if the Display impl drops the status code, which
/// is the only way to tell an outage from a bad request in the logs.
#[test]
fn given_server_error_when_formatted_then_includes_status_category_and_location() {
    let err = TranslationClientError::Server {
        status: HttpStatusCode(502),
        message: String::from("bad gateway"),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.contains("HTTP 502"));
    assert!(text.contains("server error"));
    assert!(text.contains("bad gateway"));
    assert!(text.contains("translation_client.rs"));
}

#[test]
fn given_non_server_error_when_status_queried_then_none() {
    let err = TranslationClientError::Http {
        message: String::from("dns failure"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.status(), None);
}

/// **VALUE**: Unreadable-file errors keep the OS error as their source.
#[test]
fn given_unreadable_file_error_when_inspected_then_preserves_source_chain() {
    let err = ValidationError::UnreadableFile {
        path: PathBuf::from("/tmp/missing.txt"),
        location: ErrorLocation::from(Location::caller()),
        source: IoError::new(ErrorKind::PermissionDenied, "access denied"),
    };

    let source = err.source().expect("Should have error source");

    assert!(source.to_string().contains("access denied"));
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn given_client_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = TranslationClientError::Http {
        message: String::from("connection reset"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
    assert!(matches!(core, CoreError::TranslationClient(_)));
}
