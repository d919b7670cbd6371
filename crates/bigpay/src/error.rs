use thiserror::Error;

use crate::response::ApiResponse;

/// Errors returned by bigpay operations.
///
/// The client facade hands these back exactly as its collaborators produced
/// them.
#[derive(Debug, Error)]
pub enum BigpayError {
    #[error("http error: {0}")]
    Http(String),

    #[error("request rejected with status {}", .0.status)]
    Rejected(Box<ApiResponse>),

    #[error("invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl BigpayError {
    /// The rejected response, if the service answered with a non-2xx status.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Rejected(resp) => Some(resp),
            _ => None,
        }
    }
}
