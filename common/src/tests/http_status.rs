use crate::HttpStatusCode;

/// **VALUE**: The client logs failed translations by status category; a wrong range
/// check would misreport backend outages as bad requests.
#[test]
fn given_status_codes_when_categorized_then_ranges_match() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(422).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(499).is_server_error());

    assert_eq!(HttpStatusCode(404).category(), "client error");
    assert_eq!(HttpStatusCode(502).category(), "server error");
    assert_eq!(HttpStatusCode(302).category(), "unexpected status");
}

#[test]
fn given_u16_when_converted_then_displays_bare_number() {
    let status = HttpStatusCode::from(503);

    assert_eq!(status, HttpStatusCode(503));
    assert_eq!(status.to_string(), "503");
}
