use std::error::Error as ErrorT;

use riftlink_shared::ApiError;
use thiserror::Error;

/// Opaque failure raised by an [`HttpTransport`](crate::api::transport::HttpTransport).
pub type BoxError = Box<dyn ErrorT + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("Transport error: {0}")]
    Transport(BoxError),

    #[error("HTTP status error: {0}")]
    Status(ApiError),

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Rate limited without a usable Retry-After header (got {0:?})")]
    InvalidRetryAfter(Option<String>),

    #[error("no data for champion {0}")]
    ChampionNotFound(String),
}

impl RiotApiError {
    /// HTTP-level error carried by this failure, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            RiotApiError::Status(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.api_error() == Some(&ApiError::NOT_FOUND)
    }
}

impl From<ApiError> for RiotApiError {
    fn from(value: ApiError) -> Self {
        RiotApiError::Status(value)
    }
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;
