use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed with status {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Body(String),
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Status(_) => "The backend rejected the request. Please try again.",
            ApiError::Network(_) => "Network error. Check your connection and the backend.",
            ApiError::Body(_) => "The backend sent an unexpected response.",
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
