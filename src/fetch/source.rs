use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

/// Message shown for any non-success HTTP status.
pub const BAD_STATUS_MESSAGE: &str = "Network response was not ok";

/// Ways a fetch can fail.
///
/// The variants stay distinct so callers and tests can tell them apart,
/// but `Display` yields the plain message that ends up on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed (DNS, connection refused, body read).
    Network(String),
    /// The server answered with a non-success status. The body is not read.
    HttpStatus(u16),
    /// The body was not valid JSON. Carries the parser's description.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "{msg}"),
            FetchError::HttpStatus(_) => write!(f, "{BAD_STATUS_MESSAGE}"),
            FetchError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the JSON payload for one trigger.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// The resource being queried, for display and logging.
    fn endpoint(&self) -> &str;

    /// Performs one request and returns the parsed body.
    async fn fetch_json(&self) -> Result<Value, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_ignores_code() {
        assert_eq!(
            FetchError::HttpStatus(500).to_string(),
            "Network response was not ok"
        );
        assert_eq!(
            FetchError::HttpStatus(404).to_string(),
            "Network response was not ok"
        );
    }

    #[test]
    fn test_detail_variants_display_their_detail() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "connection refused"
        );
        assert_eq!(
            FetchError::Parse("expected value at line 1 column 1".to_string()).to_string(),
            "expected value at line 1 column 1"
        );
    }
}
