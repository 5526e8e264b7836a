//! HTTP status code utilities for error categorization.

/// HTTP status code carried by failed translation calls.
///
/// Stored directly rather than parsed from error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 4xx client errors (bad payload, unknown language, ...).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors (translation backend down or overloaded).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Short label used in log lines.
    pub fn category(&self) -> &'static str {
        if self.is_client_error() {
            "client error"
        } else if self.is_server_error() {
            "server error"
        } else {
            "unexpected status"
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
