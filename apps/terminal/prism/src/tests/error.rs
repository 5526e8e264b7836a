use crate::error::PrismError;

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: The message printed on exit names the failing layer and where it failed.
#[test]
fn given_core_error_when_displayed_then_includes_layer_message_and_location() {
    let err = PrismError::Core {
        message: String::from("bad base url"),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.starts_with("Core Error: bad base url"));
    assert!(text.contains("error.rs"));
}
