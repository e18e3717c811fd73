use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Missing, malformed, badly signed or expired bearer token
    Unauthorized,
    /// Valid token, but the caller's user record is not an admin
    Forbidden,
    InvalidObjectId(String),
    Database(String),
    Token(String),
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized access"),
            AppError::Forbidden => write!(f, "forbidden access"),
            AppError::InvalidObjectId(id) => write!(f, "Invalid object id: {}", id),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Token(msg) => write!(f, "Token error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Unauthorized | AppError::Forbidden => self.to_string(),
            other => {
                // Faults other than the two auth outcomes stay opaque to the client
                log::error!("❌ {}", other);
                "internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": true,
            "message": message
        }))
    }
}
