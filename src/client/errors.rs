//! Fetch errors
//!
//! The failure taxonomy for the location-based fetcher. Callers must be
//! able to distinguish every class here; only the transient ones are ever
//! retried.

use reqwest::StatusCode;
use thiserror::Error;

use crate::search::MIN_POSTCODE_LEN;

/// Errors surfaced by [`crate::client::SkipClient`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Search params failed the strict postcode gate. Never retried.
    #[error("invalid search parameters: postcode must be at least {MIN_POSTCODE_LEN} characters")]
    InvalidSearch,

    /// A skip id of zero was requested. Never retried.
    #[error("invalid skip id")]
    InvalidSkipId,

    /// The request exceeded the configured timeout.
    #[error("request timed out - please try again")]
    Timeout,

    /// The network was unreachable or the connection failed.
    #[error("network error - please check your connection")]
    NetworkUnavailable,

    /// The request was blocked by a client-side policy (the CORS
    /// equivalent, e.g. a refused redirect).
    #[error("request blocked by policy")]
    BlockedByPolicy,

    /// The server rejected the request as malformed (HTTP 400).
    #[error("bad request")]
    BadRequest,

    /// Authentication required (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// Access denied (HTTP 403).
    #[error("forbidden")]
    Forbidden,

    /// Zero skips for the location (HTTP 404). Not necessarily an error
    /// state to the caller; often presented as an empty result.
    #[error("no skips found for this location")]
    NotFound,

    /// Too many requests (HTTP 429). Conceptually retryable after a
    /// delay, but terminal for a single user-initiated search.
    #[error("rate limited - please wait before trying again")]
    RateLimited,

    /// A 5xx response.
    #[error("server error (status {0}) - please try again later")]
    Server(u16),

    /// A status outside the documented taxonomy.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),

    /// The response body failed shape validation. Indicates an API
    /// contract break; always surfaced, never retried.
    #[error("malformed response from the skip API")]
    MalformedResponse(#[source] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to construct HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    /// Whether the retry loop may attempt this failure again.
    ///
    /// Only generic transient failures qualify: timeouts, network
    /// unavailability and 5xx responses.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::NetworkUnavailable | Self::Server(_)
        )
    }

    /// Maps a non-2xx HTTP status to its error class.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited,
            status if status.is_server_error() => Self::Server(status.as_u16()),
            status => Self::UnexpectedStatus(status.as_u16()),
        }
    }

    /// Classifies a reqwest transport failure.
    pub(crate) fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_redirect() {
            Self::BlockedByPolicy
        } else {
            Self::NetworkUnavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_distinct_classes() {
        assert!(matches!(
            FetchError::from_status(StatusCode::BAD_REQUEST),
            FetchError::BadRequest
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::NOT_FOUND),
            FetchError::NotFound
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::TOO_MANY_REQUESTS),
            FetchError::RateLimited
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::BAD_GATEWAY),
            FetchError::Server(502)
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::IM_A_TEAPOT),
            FetchError::UnexpectedStatus(418)
        ));
    }

    #[test]
    fn only_timeouts_network_and_5xx_are_transient() {
        assert!(FetchError::Timeout.is_transient());
        assert!(FetchError::NetworkUnavailable.is_transient());
        assert!(FetchError::Server(503).is_transient());

        assert!(!FetchError::InvalidSearch.is_transient());
        assert!(!FetchError::NotFound.is_transient());
        assert!(!FetchError::RateLimited.is_transient());
        assert!(!FetchError::BlockedByPolicy.is_transient());
    }
}
