use crate::ErrorLocation;

use std::panic::Location;

#[track_caller]
fn capture() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

/// **VALUE**: Every error variant in the workspace embeds an `ErrorLocation`; if capture
/// breaks, every logged failure points nowhere.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` propagation through
/// `ErrorLocation::from` stops reporting the calling site.
#[test]
fn given_track_caller_helper_when_capturing_then_reports_call_site_file() {
    // GIVEN/WHEN: Capturing through a #[track_caller] helper
    let location = capture();

    // THEN: The file is this test file, not the helper's definition site
    assert!(location.file.ends_with("error_location.rs"));
    assert!(location.line > 0);
    assert!(location.column > 0);
}

/// **VALUE**: Distinct call sites must produce distinct locations, otherwise two
/// different failure points in the client would log identically.
#[test]
fn given_two_call_sites_when_capturing_then_lines_differ() {
    let first = capture();
    let second = capture();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}

/// **VALUE**: Error messages render locations as `[file:line:column]`; log scrapers and
/// humans both rely on that shape.
#[test]
fn given_error_location_when_displayed_then_bracketed_triplet() {
    let location = ErrorLocation {
        file: "src/shell/mod.rs",
        line: 42,
        column: 7,
    };

    assert_eq!(location.to_string(), "[src/shell/mod.rs:42:7]");
}
