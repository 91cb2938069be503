use cfa_core::{ApiError, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("server returned {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no authentication token stored")]
    Unauthenticated,

    #[error("credential store: {0}")]
    Store(#[from] StoreError),
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::HttpRequest(e) => ApiError::Transport(e.to_string()),
            ClientError::InvalidConfig(msg) => ApiError::Transport(msg),
            ClientError::Rejected { status, message } => ApiError::Status { status, message },
            ClientError::InvalidResponse(msg) => ApiError::InvalidResponse(msg),
            ClientError::Unauthenticated => ApiError::Unauthenticated,
            ClientError::Store(e) => ApiError::from(e),
        }
    }
}
