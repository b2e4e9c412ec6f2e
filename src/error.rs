use http::{Method, StatusCode};
use serde_json::Value;
use std::{error::Error as StdError, fmt};
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, Error>;

/// Machine code reported when no HTTP response was obtained at all.
pub(crate) const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";

#[derive(Debug, Clone, Copy)]
pub struct BodySnippetConfig {
    pub enabled: bool,
    pub max_bytes: usize,
}

impl Default for BodySnippetConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_bytes: 4096,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    Auth,
    Validation,
    Api,
    Network,
    Decode,
    InvalidConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

/// Context for a non-2xx response that is neither a 401 nor a 422.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub method: Method,
    /// Sanitized URL: no query/fragment/userinfo.
    pub url: Box<Url>,
    /// Server-supplied machine code, `UNKNOWN` when absent.
    pub code: Box<str>,
    pub message: Box<str>,
    pub request_id: Option<Box<str>>,
    pub body_snippet: Option<Box<str>>,
}

impl ApiError {
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// All errors returned by the SDK.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Unrecoverable 401: no refresh token, refresh already attempted, or
    /// the refresh call itself failed.
    #[error("Authentication failed: {message}")]
    Auth { message: Box<str> },

    /// 422 carrying the server's structured `detail` payload verbatim.
    #[error("Validation failed")]
    Validation { detail: Value },

    /// Any other non-2xx HTTP response.
    #[error("{0}")]
    Api(ApiError),

    /// No response obtained (DNS, connection refused, timeout).
    #[error("Network error during {method} {path}: {source}")]
    Network {
        method: Method,
        path: Box<str>,
        kind: TransportErrorKind,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// 2xx response whose body did not decode as the expected type.
    #[error("Decode error (HTTP {status}) during {method} {path}: {source}")]
    Decode {
        status: StatusCode,
        method: Method,
        path: Box<str>,
        request_id: Option<Box<str>>,
        body_snippet: Option<Box<str>>,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: Box<str>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Api(_) => ErrorKind::Api,
            Self::Network { .. } => ErrorKind::Network,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// Status code associated with the failure. Network failures report a
    /// fixed 500 since no server data exists to enrich them.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Validation { .. } => Some(StatusCode::UNPROCESSABLE_ENTITY),
            Self::Api(e) => Some(e.status),
            Self::Network { .. } => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Decode { status, .. } => Some(*status),
            Self::InvalidConfig { .. } => None,
        }
    }

    /// Machine-readable code for programmatic handling, where one exists.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api(e) => Some(&e.code),
            Self::Network { .. } => Some(NETWORK_ERROR_CODE),
            _ => None,
        }
    }

    /// Field-level validation errors reported by a 422 response.
    #[must_use]
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Validation { detail } => Some(detail),
            _ => None,
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.request_id.as_deref(),
            Self::Decode { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => matches!(
                e.status,
                StatusCode::TOO_MANY_REQUESTS
                    | StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT
            ),
            Self::Network { kind, .. } => matches!(
                kind,
                TransportErrorKind::Timeout | TransportErrorKind::Connect
            ),
            _ => false,
        }
    }

    pub(crate) fn auth(message: impl Into<Box<str>>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} ({} {}): {}",
            self.status,
            self.method,
            self.path(),
            self.message
        )?;
        if self.code.as_ref() != "UNKNOWN" {
            write!(f, " [code: {}]", self.code)?;
        }
        if let Some(request_id) = self.request_id.as_deref() {
            write!(f, " [request-id: {request_id}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: StatusCode, code: &str, message: &str) -> Error {
        Error::Api(ApiError {
            status,
            method: Method::GET,
            url: Box::new(Url::parse("https://example.com/health").unwrap()),
            code: code.into(),
            message: message.into(),
            request_id: None,
            body_snippet: None,
        })
    }

    #[test]
    fn network_error_reports_fixed_status_and_code() {
        let err = Error::Network {
            method: Method::GET,
            path: "/health".into(),
            kind: TransportErrorKind::Connect,
            source: "connection refused".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.code(), Some("NETWORK_ERROR"));
        assert!(err.is_retryable());
    }

    #[test]
    fn validation_error_exposes_detail() {
        let detail = serde_json::json!([{"loc": ["body", "email"], "msg": "invalid"}]);
        let err = Error::Validation {
            detail: detail.clone(),
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(err.detail(), Some(&detail));
    }

    #[test]
    fn api_error_display_includes_code_when_known() {
        let err = api_error(StatusCode::PAYMENT_REQUIRED, "INSUFFICIENT_CREDITS", "broke");
        let text = err.to_string();
        assert!(text.contains("402"));
        assert!(text.contains("INSUFFICIENT_CREDITS"));

        let unknown = api_error(StatusCode::INTERNAL_SERVER_ERROR, "UNKNOWN", "boom");
        assert!(!unknown.to_string().contains("[code:"));
    }

    #[test]
    fn retryable_statuses() {
        assert!(api_error(StatusCode::SERVICE_UNAVAILABLE, "UNKNOWN", "x").is_retryable());
        assert!(!api_error(StatusCode::BAD_REQUEST, "UNKNOWN", "x").is_retryable());
        assert!(!Error::auth("session expired").is_retryable());
    }
}
