use thiserror::Error;

use crate::secret::StoreError;

/// Failure reported by a [`TechApi`](crate::TechApi) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("no authentication token stored")]
    Unauthenticated,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("credential store: {0}")]
    Store(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("not logged in")]
    NotAuthenticated,

    #[error("no technician id stored; log in again")]
    MissingTechnicianId,

    #[error("invalid login token: {0}")]
    InvalidToken(String),

    #[error("credential store: {0}")]
    Store(#[from] StoreError),

    #[error("api error: {0}")]
    Api(#[from] ApiError),
}
