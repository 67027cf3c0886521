use std::num::ParseFloatError;

use thiserror::Error;

use crate::http_client::HttpError;

/// Non-200 response from IEX Cloud.
///
/// `message` is the raw response body, or empty when the body could not be
/// read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{status_code} {reason}: {message}", reason = canonical_reason(.status_code))]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// 4xx: usually a bad symbol, bad option combination or a rejected token.
    pub const fn is_client_error(&self) -> bool {
        self.status_code >= 400 && self.status_code < 500
    }

    pub const fn is_server_error(&self) -> bool {
        self.status_code >= 500 && self.status_code < 600
    }
}

fn canonical_reason(status_code: &u16) -> &'static str {
    reqwest::StatusCode::from_u16(*status_code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

/// Top-level error type for client operations.
#[derive(Debug, Error)]
pub enum IexError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("price response is not a number: '{body}'")]
    InvalidPrice {
        body: String,
        #[source]
        source: ParseFloatError,
    },
}

impl IexError {
    /// The API error carried by this value, if the upstream answered with a
    /// non-200 status.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }
}
