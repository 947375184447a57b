/// Error types for the classify workflow and startup configuration
///
/// Every `ClassifyError` ends its life as an inline message in the widget,
/// so each variant carries a user-facing text via `user_message()` next to
/// the technical detail used for logging.

use std::time::Duration;
use thiserror::Error;

/// Shown for any failure where trying again is the only sensible advice
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server.";
pub const NO_FILE_MESSAGE: &str = "Please select an image.";
pub const UNREADABLE_IMAGE_MESSAGE: &str = "Could not read the selected image.";

/// Failures of a single pick/submit round trip
///
/// `Clone` because errors travel inside iced messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("no image selected")]
    NoFileSelected,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service answered with HTTP {0}")]
    Http(u16),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("unreadable image: {0}")]
    UnreadableImage(String),
}

impl ClassifyError {
    /// Text shown to the user in the error area
    pub fn user_message(&self) -> &'static str {
        match self {
            ClassifyError::NoFileSelected => NO_FILE_MESSAGE,
            ClassifyError::Transport(_) | ClassifyError::Http(_) | ClassifyError::Timeout(_) => {
                GENERIC_FAILURE_MESSAGE
            }
            ClassifyError::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE,
            ClassifyError::UnreadableImage(_) => UNREADABLE_IMAGE_MESSAGE,
        }
    }
}

/// Startup configuration problems; the only errors that stop the app
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CLASSIFIER_API_BASE_URL is not set (env, build env or config file)")]
    MissingApiBaseUrl,

    #[error("invalid URL for {field}: {value} ({reason})")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("failed to read config file {path}: {reason}")]
    File { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_http_and_timeout_share_message() {
        let transport = ClassifyError::Transport("connection refused".into());
        let http = ClassifyError::Http(500);
        let timeout = ClassifyError::Timeout(Duration::from_secs(30));

        assert_eq!(transport.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(http.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(timeout.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_invalid_response_has_distinct_message() {
        let err = ClassifyError::InvalidResponse("missing field".into());
        assert_eq!(err.user_message(), INVALID_RESPONSE_MESSAGE);
        assert_ne!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_display_keeps_technical_detail() {
        let err = ClassifyError::Http(503);
        assert_eq!(err.to_string(), "service answered with HTTP 503");
    }
}
