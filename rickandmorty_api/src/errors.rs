//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (connect failure, timeout, or body read).
    #[error("Get \"{url}\": {message}")]
    Unreachable { url: String, message: String },
    /// The response body did not match the expected JSON shape.
    #[error("Decode response from \"{url}\" (status {status}): {message}")]
    DecodeFailed {
        url: String,
        status: u16,
        message: String,
    },
    /// The underlying HTTP client could not be constructed (e.g. TLS backend init).
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
    /// A base URL or a pagination link could not be parsed.
    #[error("Invalid URL \"{url}\": {message}")]
    InvalidUrl { url: String, message: String },
}

impl Error {
    /// True for failures that happened before a response body was available.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_build_failure_is_not_a_transport_error() {
        let err = Error::ClientBuild {
            message: "no TLS backend".to_string(),
        };
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Failed to build HTTP client: no TLS backend");
    }

    #[test]
    fn unreachable_and_invalid_url_are_transport_errors() {
        let unreachable = Error::Unreachable {
            url: "http://127.0.0.1:1/character/1".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(unreachable.is_transport());
        assert_eq!(
            unreachable.to_string(),
            "Get \"http://127.0.0.1:1/character/1\": connection refused"
        );
        let invalid = Error::InvalidUrl {
            url: String::new(),
            message: "relative URL without a base".to_string(),
        };
        assert!(invalid.is_transport());
    }
}
