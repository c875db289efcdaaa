use crate::application::BookingApplicationError;
use crate::domain::ValidationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
/// ビジネス上の結果（予約済み等）はエラーではないため、ここでは扱わない。
#[derive(Debug)]
pub enum ApiError {
    /// リクエストボディを読み取れない（不正なJSON、型の不一致、必須項目の欠落）
    MalformedRequest(String),
    Application(BookingApplicationError),
}

impl From<BookingApplicationError> for ApiError {
    fn from(err: BookingApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Application(BookingApplicationError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = match self {
            ApiError::MalformedRequest(message) => {
                let body = Json(ErrorResponse::new("VALIDATION_ERROR", message));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            ApiError::Application(err) => err,
        };

        let (status, error_type, message) = match err {
            // 400 Bad Request - 入力値が不正
            BookingApplicationError::Validation(ref e) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookingApplicationError::ShowTimeLookupError(ref e) => {
                tracing::error!("Show time lookup error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SHOW_TIME_LOOKUP_ERROR",
                    "Show time lookup failed".to_string(),
                )
            }
            BookingApplicationError::BookingStoreError(ref e) => {
                tracing::error!("Booking store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "BOOKING_STORE_ERROR",
                    "Failed to access booking store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
