//! Error types surfaced to the user

use crate::constants::*;
use thiserror::Error;

/// Every failure the converter can report. `Display` yields the user-facing
/// text; the `String` payloads other than `Server` are details for the log.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Please enter text to convert.")]
    EmptyInput,
    #[error("Could not reach the conversion server.")]
    Network(String),
    #[error("{0}")]
    Server(String),
    #[error("The server returned an unexpected response.")]
    MalformedResponse(String),
    #[error("Failed to copy to clipboard.")]
    ClipboardUnavailable(String),
    #[error("Nothing to copy.")]
    NothingToCopy,
}

impl ConvertError {
    /// Build a `Server` error from a non-success response body, falling back
    /// to a generic message when the body has no usable `error` field.
    pub fn from_error_body(body: &str) -> Self {
        let message = serde_json::from_str::<crate::types::ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| MSG_UNKNOWN_SERVER_ERROR.to_string());
        ConvertError::Server(message)
    }
}

impl From<reqwest::Error> for ConvertError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ConvertError::MalformedResponse(e.to_string())
        } else {
            ConvertError::Network(e.to_string())
        }
    }
}

/// Target option list failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetSetError {
    #[error("no target options configured")]
    Empty,
    #[error("duplicate target option value: {0}")]
    DuplicateValue(String),
    #[error("default target {0:?} is not one of the configured options")]
    UnknownDefault(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_passes_message_through() {
        let err = ConvertError::from_error_body(r#"{"error": "bad target"}"#);
        assert_eq!(err, ConvertError::Server("bad target".into()));
        assert_eq!(err.to_string(), "bad target");
    }

    #[test]
    fn server_error_falls_back_on_unparseable_body() {
        for body in ["", "<html>oops</html>", "{}", r#"{"error": ""}"#, r#"{"error": 5}"#] {
            assert_eq!(
                ConvertError::from_error_body(body),
                ConvertError::Server(MSG_UNKNOWN_SERVER_ERROR.into()),
                "body: {body:?}"
            );
        }
    }

    #[test]
    fn user_messages_match_constants() {
        assert_eq!(ConvertError::EmptyInput.to_string(), MSG_EMPTY_INPUT);
        assert_eq!(ConvertError::NothingToCopy.to_string(), MSG_NOTHING_TO_COPY);
        assert_eq!(
            ConvertError::ClipboardUnavailable("x11 gone".into()).to_string(),
            MSG_COPY_FAILED
        );
    }
}
