use std::borrow::Cow;

use thiserror::Error;

/// HTTP-level failure reported by a Riot endpoint.
///
/// Two errors are equal when both their message and status code match, so callers
/// can compare a returned error against the named constants below.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    message: Cow<'static, str>,
    status: u16,
}

impl ApiError {
    pub const BAD_REQUEST: Self = Self::known("bad request", 400);
    pub const UNAUTHORIZED: Self = Self::known("unauthorized", 401);
    pub const FORBIDDEN: Self = Self::known("forbidden", 403);
    pub const NOT_FOUND: Self = Self::known("data not found", 404);
    pub const METHOD_NOT_ALLOWED: Self = Self::known("method not allowed", 405);
    pub const UNSUPPORTED_MEDIA_TYPE: Self = Self::known("unsupported media type", 415);
    pub const RATE_LIMIT_EXCEEDED: Self = Self::known("rate limit exceeded", 429);
    pub const INTERNAL_SERVER_ERROR: Self = Self::known("internal server error", 500);
    pub const BAD_GATEWAY: Self = Self::known("bad gateway", 502);
    pub const SERVICE_UNAVAILABLE: Self = Self::known("service unavailable", 503);
    pub const GATEWAY_TIMEOUT: Self = Self::known("gateway timeout", 504);

    pub const UNKNOWN_REASON: &'static str = "unknown error reason";

    const KNOWN: [Self; 11] = [
        Self::BAD_REQUEST,
        Self::UNAUTHORIZED,
        Self::FORBIDDEN,
        Self::NOT_FOUND,
        Self::METHOD_NOT_ALLOWED,
        Self::UNSUPPORTED_MEDIA_TYPE,
        Self::RATE_LIMIT_EXCEEDED,
        Self::INTERNAL_SERVER_ERROR,
        Self::BAD_GATEWAY,
        Self::SERVICE_UNAVAILABLE,
        Self::GATEWAY_TIMEOUT,
    ];

    const fn known(message: &'static str, status: u16) -> Self {
        Self {
            message: Cow::Borrowed(message),
            status,
        }
    }

    pub fn new(message: impl Into<Cow<'static, str>>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Map a non-2xx status code to its named error, or to a generic one carrying the code.
    pub fn from_status(status: u16) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.status == status)
            .cloned()
            .unwrap_or_else(|| Self::known(Self::UNKNOWN_REASON, status))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_named_errors() {
        let table = [
            (400, ApiError::BAD_REQUEST),
            (401, ApiError::UNAUTHORIZED),
            (403, ApiError::FORBIDDEN),
            (404, ApiError::NOT_FOUND),
            (405, ApiError::METHOD_NOT_ALLOWED),
            (415, ApiError::UNSUPPORTED_MEDIA_TYPE),
            (429, ApiError::RATE_LIMIT_EXCEEDED),
            (500, ApiError::INTERNAL_SERVER_ERROR),
            (502, ApiError::BAD_GATEWAY),
            (503, ApiError::SERVICE_UNAVAILABLE),
            (504, ApiError::GATEWAY_TIMEOUT),
        ];

        for (code, expected) in table {
            let err = ApiError::from_status(code);
            assert_eq!(err, expected);
            assert_eq!(err.status(), code);
        }
    }

    #[test]
    fn unknown_code_keeps_status() {
        let err = ApiError::from_status(999);
        assert_eq!(err.status(), 999);
        assert_eq!(err.message(), "unknown error reason");
        assert_eq!(err, ApiError::new("unknown error reason", 999));
    }

    #[test]
    fn equality_is_structural() {
        assert_ne!(ApiError::NOT_FOUND, ApiError::FORBIDDEN);
        assert_eq!(ApiError::new("data not found".to_string(), 404), ApiError::NOT_FOUND);
        assert_ne!(ApiError::new("data not found", 410), ApiError::NOT_FOUND);
    }

    #[test]
    fn display_includes_status() {
        assert_eq!(ApiError::FORBIDDEN.to_string(), "forbidden (HTTP 403)");
    }
}
