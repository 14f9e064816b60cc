//! Error types for Wayfarer server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    StorageFailure = 3,
    NoSuchTrip = 4,
    NoSuchDay = 5,
    LastDayProtected = 7,
    Duplicate = 8,
    GenerationFailure = 9,
    WeatherFailure = 10,
    CurrencyFailure = 11,
    BadValue = 18,
    ImportFormat = 19,
    NoSuchData = 20,
    MergeMismatch = 21,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Trip not found: {0}")]
    TripNotFound(String),

    #[error("Day not found: {0}")]
    DayNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Import format error: {0}")]
    ImportFormat(String),

    #[error("Merge mismatch: {0}")]
    MergeMismatch(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Weather lookup error: {0}")]
    Weather(String),

    #[error("Exchange rate error: {0}")]
    Currency(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::TripNotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchTrip, msg.clone())
            }
            AppError::DayNotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchDay, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageFailure,
                    "Storage error".to_string(),
                )
            }
            AppError::Corrupt(msg) => {
                tracing::error!("Corrupt snapshot: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageFailure,
                    "Corrupt snapshot".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
            AppError::ImportFormat(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::ImportFormat, msg.clone())
            }
            AppError::MergeMismatch(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::MergeMismatch, msg.clone())
            }
            AppError::Generation(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorCode::GenerationFailure, msg.clone())
            }
            AppError::Weather(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorCode::WeatherFailure, msg.clone())
            }
            AppError::Currency(msg) => {
                (StatusCode::BAD_GATEWAY, ErrorCode::CurrencyFailure, msg.clone())
            }
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::LastDayProtected, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Corrupt(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
