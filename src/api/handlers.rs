use crate::application::{
    BookingApplicationError, ServiceDependencies,
    booking::{BookingOutcome, book_seat as execute_book_seat, compute_availability},
    showtime::list_show_times_for_day,
};
use crate::domain::{BookingId, ShowTimeId, showtime::parse_weekday};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Datelike;
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{
        BookSeatRequest, BookingCreatedResponse, BookingResponse, ErrorResponse,
        ListShowTimesQuery, SeatAvailabilityResponse, ShowTimeResponse,
    },
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /bookings - 座席を予約
///
/// 予約結果ごとのレスポンス:
/// - Success → 201 Created
/// - ShowTimeNotFound → 404 Not Found
/// - SeatAlreadyBooked → 409 Conflict
/// - SeatNotInHall → 422 Unprocessable Entity
///
/// 読み取れないリクエストボディは 400 VALIDATION_ERROR になる。
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookSeatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = req.to_command()?;

    let outcome = execute_book_seat(&state.service_deps, cmd).await?;

    let response = match outcome {
        BookingOutcome::Success {
            booking_id,
            seat_display,
            movie_title,
        } => {
            let body = BookingCreatedResponse {
                booking_id: booking_id.to_string(),
                seat: seat_display,
                movie_title,
            };
            (StatusCode::CREATED, Json(body)).into_response()
        }
        BookingOutcome::ShowTimeNotFound { show_time_id } => outcome_response(
            StatusCode::NOT_FOUND,
            "SHOW_TIME_NOT_FOUND",
            format!("Show time {} not found", show_time_id),
        ),
        BookingOutcome::SeatAlreadyBooked { seat } => outcome_response(
            StatusCode::CONFLICT,
            "SEAT_ALREADY_BOOKED",
            format!("Seat {} is already booked", seat),
        ),
        BookingOutcome::SeatNotInHall { seat, hall_id } => outcome_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "SEAT_NOT_IN_HALL",
            format!("Seat {} does not exist in hall {}", seat, hall_id),
        ),
    };

    Ok(response)
}

fn outcome_response(status: StatusCode, error_type: &str, message: String) -> Response {
    (status, Json(ErrorResponse::new(error_type, message))).into_response()
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /bookings/:id - 予約詳細をIDで取得
pub async fn get_booking_by_id(
    State(state): State<Arc<AppState>>,
    booking_id: Result<Path<String>, PathRejection>,
) -> Result<Json<BookingResponse>, QueryError> {
    let Path(booking_id) = booking_id?;
    let booking_id =
        BookingId::new(booking_id).map_err(|e| QueryError::BadRequest(e.to_string()))?;

    match state.service_deps.booking_store.find_by_id(&booking_id).await {
        Ok(Some(booking)) => Ok(Json(BookingResponse::from(booking))),
        Ok(None) => Err(QueryError::NotFound(format!(
            "Booking {} not found",
            booking_id
        ))),
        Err(e) => Err(QueryError::InternalError(e.to_string())),
    }
}

/// GET /showtimes - 曜日別の上映一覧
///
/// クエリパラメータ:
/// - day: 曜日（"monday", "Mon" など）。省略時は今日の曜日
pub async fn list_show_times(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListShowTimesQuery>, QueryRejection>,
) -> Result<Json<Vec<ShowTimeResponse>>, QueryError> {
    let Query(query) = query?;
    let day = match &query.day {
        Some(day) => parse_weekday(day).map_err(|e| QueryError::BadRequest(e.to_string()))?,
        None => state.service_deps.clock.now().weekday(),
    };

    let show_times = list_show_times_for_day(&state.service_deps, day)
        .await
        .map_err(QueryError::from)?;

    Ok(Json(
        show_times.into_iter().map(ShowTimeResponse::from).collect(),
    ))
}

/// GET /showtimes/:id/seats - 上映の空席状況
///
/// 存在しない上映は404を返す。
pub async fn get_seat_availability(
    State(state): State<Arc<AppState>>,
    show_time_id: Result<Path<String>, PathRejection>,
) -> Result<Json<SeatAvailabilityResponse>, QueryError> {
    let Path(show_time_id) = show_time_id?;
    let show_time_id =
        ShowTimeId::new(show_time_id).map_err(|e| QueryError::BadRequest(e.to_string()))?;

    let show_time = state
        .service_deps
        .show_time_lookup
        .find_by_id(&show_time_id)
        .await
        .map_err(|e| QueryError::InternalError(e.to_string()))?;

    if show_time.is_none() {
        return Err(QueryError::NotFound(format!(
            "Show time {} not found",
            show_time_id
        )));
    }

    let availability = compute_availability(&state.service_deps, &show_time_id)
        .await
        .map_err(QueryError::from)?;

    Ok(Json(SeatAvailabilityResponse::new(
        &show_time_id,
        availability,
    )))
}

// ============================================================================
// Error types
// ============================================================================

/// クエリハンドラー用のエラー型
#[derive(Debug)]
pub enum QueryError {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl From<BookingApplicationError> for QueryError {
    fn from(err: BookingApplicationError) -> Self {
        match err {
            BookingApplicationError::Validation(e) => QueryError::BadRequest(e.to_string()),
            BookingApplicationError::ShowTimeLookupError(e)
            | BookingApplicationError::BookingStoreError(e) => {
                QueryError::InternalError(e.to_string())
            }
        }
    }
}

impl From<PathRejection> for QueryError {
    fn from(rejection: PathRejection) -> Self {
        QueryError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for QueryError {
    fn from(rejection: QueryRejection) -> Self {
        QueryError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            QueryError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            QueryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            QueryError::InternalError(msg) => {
                // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
                tracing::error!("Internal error in query handler: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
