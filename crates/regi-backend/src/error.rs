//! # Backend Error Types
//!
//! Error taxonomy for the two backend calls.
//!
//! Every variant renders an operator-facing message: the session surfaces
//! `to_string()` of these errors in its error display slots, so messages
//! must make sense on a register screen.

use thiserror::Error;

/// Result type alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Failures of the product-lookup and purchase-submission calls.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The configured base URL could not be parsed.
    #[error("invalid backend base URL: {0}")]
    InvalidBaseUrl(String),

    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("サーバーエラー (HTTP {status})")]
    Status { status: u16 },

    /// The response body could not be decoded as the expected shape.
    #[error("応答の解析に失敗しました: {0}")]
    Decode(String),
}

impl From<url::ParseError> for BackendError {
    fn from(err: url::ParseError) -> Self {
        BackendError::InvalidBaseUrl(err.to_string())
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_operator_facing() {
        let err = BackendError::Status { status: 500 };
        assert_eq!(err.to_string(), "サーバーエラー (HTTP 500)");
    }

    #[test]
    fn test_invalid_url_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: BackendError = parse_err.into();
        assert!(matches!(err, BackendError::InvalidBaseUrl(_)));
    }
}
