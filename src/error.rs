/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error taxonomy of the Zendure client
//!
//! Failures come in three levels, from most to least specific:
//!
//! - [`ApiError::Authentication`]: the API rejected the credentials (401/403)
//! - [`ApiError::Communication`]: the request did not complete successfully
//!   (bad status, timeout, network)
//! - [`ApiError::Generic`]: anything else, with the original cause attached
//!
//! An authentication error is also a communication error, see
//! [`ApiError::is_communication`].

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Boxed cause carried by errors that wrap a lower level failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a request was classified as a communication failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunicationReason {
    /// The server answered with a non-success status other than 401/403
    Status(StatusCode),
    /// The request did not complete before the deadline
    Timeout,
    /// Connection, DNS or transport failure
    Network,
}

impl fmt::Display for CommunicationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommunicationReason::Status(status) => write!(f, "unexpected status {status}"),
            CommunicationReason::Timeout => write!(f, "timeout error fetching information"),
            CommunicationReason::Network => write!(f, "error fetching information"),
        }
    }
}

/// Error returned by every Zendure API call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the request with 401 or 403
    #[error("invalid credentials ({status})")]
    Authentication {
        /// Status returned by the server
        status: StatusCode,
    },

    /// The request failed on its way to or from the server
    #[error("communication error: {reason}")]
    Communication {
        /// Classification of the failure
        reason: CommunicationReason,
        /// Underlying transport error, when there is one
        #[source]
        source: Option<BoxError>,
    },

    /// Any other failure
    #[error("something really wrong happened: {0}")]
    Generic(#[source] BoxError),
}

impl ApiError {
    /// Builds a communication error for a non-success status
    #[must_use]
    pub fn status(status: StatusCode) -> Self {
        ApiError::Communication {
            reason: CommunicationReason::Status(status),
            source: None,
        }
    }

    /// Builds a communication error for an expired deadline
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        ApiError::Communication {
            reason: CommunicationReason::Timeout,
            source: Some(source.into()),
        }
    }

    /// Builds a communication error for a transport failure
    pub fn network(source: impl Into<BoxError>) -> Self {
        ApiError::Communication {
            reason: CommunicationReason::Network,
            source: Some(source.into()),
        }
    }

    /// Wraps an unexpected failure
    pub fn generic(source: impl Into<BoxError>) -> Self {
        ApiError::Generic(source.into())
    }

    /// True only for [`ApiError::Authentication`]
    #[must_use]
    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication { .. })
    }

    /// True for [`ApiError::Communication`] and for its refinement
    /// [`ApiError::Authentication`]
    #[must_use]
    pub fn is_communication(&self) -> bool {
        matches!(
            self,
            ApiError::Authentication { .. } | ApiError::Communication { .. }
        )
    }

    /// True when the deadline of the request expired
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ApiError::Communication {
                reason: CommunicationReason::Timeout,
                ..
            }
        )
    }

    /// Communication reason, if this is a communication error
    #[must_use]
    pub fn reason(&self) -> Option<CommunicationReason> {
        match self {
            ApiError::Communication { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// HTTP status behind the error, if the server answered at all
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Authentication { status } => Some(*status),
            ApiError::Communication {
                reason: CommunicationReason::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::timeout(e)
        } else if e.is_connect() || e.is_request() || e.is_body() || e.is_redirect() {
            ApiError::network(e)
        } else {
            ApiError::generic(e)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::generic(e)
    }
}
