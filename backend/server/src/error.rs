use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing or malformed bearer token")]
    Unauthorized,

    #[error("Invalid address id: {0:?}")]
    InvalidId(String),

    #[error("Address backend responded with {0}")]
    Upstream(StatusCode),

    #[error("Address backend request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Request(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
