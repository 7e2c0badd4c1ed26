//! Custom error types for proxy operations

use axum::http::StatusCode;
use thiserror::Error;

/// Proxy-related errors
///
/// The `Display` text of every variant is the message returned to the caller
/// in the `{ "error": ... }` body.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Inbound method is not POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Provider key or region missing from server configuration
    #[error(
        "Azure Translator credentials not configured on server. Please add AZURE_TRANSLATOR_KEY and AZURE_TRANSLATOR_REGION environment variables."
    )]
    MissingCredentials,

    /// Request body is not valid JSON for the expected shape
    #[error("Invalid JSON body: {message}")]
    InvalidBody {
        /// Deserializer message
        message: String,
    },

    /// `texts` missing or empty
    #[error("texts array is required")]
    MissingTexts,

    /// `targetLang` missing or empty
    #[error("targetLang is required")]
    MissingTargetLang,

    /// Provider answered with a non-2xx status
    #[error("{message}")]
    ProviderError {
        /// Upstream HTTP status
        status: u16,
        /// Upstream message, or a generic fallback
        message: String,
    },

    /// Provider returned a different number of results than texts sent
    #[error("provider returned {actual} translations for {expected} texts")]
    ResultCountMismatch {
        /// Number of texts sent upstream
        expected: usize,
        /// Number of results received
        actual: usize,
    },

    /// Provider returned a 2xx body of unexpected shape
    #[error("Invalid provider response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Outbound call failed before a response arrived
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error message
        message: String,
    },

    /// Anything else
    #[error("{0}")]
    InternalError(String),
}

impl ProxyError {
    /// Build a provider error, falling back to a generic message when the
    /// upstream body carried none.
    pub fn provider(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("provider API error: {}", status));
        ProxyError::ProviderError { status, message }
    }

    /// HTTP status returned to the caller for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::InvalidBody { .. }
            | ProxyError::MissingTexts
            | ProxyError::MissingTargetLang => StatusCode::BAD_REQUEST,
            ProxyError::ProviderError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::ResultCountMismatch { .. } | ProxyError::InvalidResponseError { .. } => {
                StatusCode::BAD_GATEWAY
            }
            ProxyError::MissingCredentials
            | ProxyError::NetworkError { .. }
            | ProxyError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ProxyError {
    fn from(err: anyhow::Error) -> Self {
        ProxyError::InternalError(err.to_string())
    }
}

/// Result type for proxy operations
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_message_fallback() {
        let err = ProxyError::provider(503, None);
        assert_eq!(err.to_string(), "provider API error: 503");
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err = ProxyError::provider(400, Some(String::new()));
        assert_eq!(err.to_string(), "provider API error: 400");
    }

    #[test]
    fn test_provider_message_passthrough() {
        let err = ProxyError::provider(400, Some("bad language".to_string()));
        assert_eq!(err.to_string(), "bad language");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_upstream_status_maps_to_bad_gateway() {
        let err = ProxyError::ProviderError {
            status: 1000,
            message: "weird".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_missing_credentials_message() {
        let message = ProxyError::MissingCredentials.to_string();
        assert!(message.starts_with("Azure Translator credentials not configured on server."));
        assert!(message.contains("AZURE_TRANSLATOR_KEY and AZURE_TRANSLATOR_REGION"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProxyError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ProxyError::MissingCredentials.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ProxyError::MissingTexts.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ProxyError::ResultCountMismatch { expected: 2, actual: 1 }.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
