use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Booking, CustomerId, SeatAvailability, ShowTimeId, ShowTimeReference, ValidationError,
    commands::BookSeat, showtime::weekday_name,
};

/// 座席予約リクエスト（POST /bookings）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSeatRequest {
    pub customer_id: String,
    pub show_time_id: String,
    pub seat_row: String,
    pub seat_number: u32,
}

impl BookSeatRequest {
    /// リクエストをコマンドに変換する
    ///
    /// 識別子の検証はここで行う。座席の検証はアプリケーション層で行う。
    pub fn to_command(&self) -> Result<BookSeat, ValidationError> {
        Ok(BookSeat {
            customer_id: CustomerId::new(self.customer_id.clone())?,
            show_time_id: ShowTimeId::new(self.show_time_id.clone())?,
            seat_row: self.seat_row.clone(),
            seat_number: self.seat_number,
        })
    }
}

/// 予約作成レスポンス（POST /bookings）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingCreatedResponse {
    pub booking_id: String,
    pub seat: String,
    pub movie_title: String,
}

/// 予約レスポンス（GET /bookings/:id）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub customer_id: String,
    pub show_time_id: String,
    pub seat: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id().to_string(),
            customer_id: booking.customer_id().to_string(),
            show_time_id: booking.show_time_id().to_string(),
            seat: booking.seat().display(),
            created_at: booking.created_at(),
        }
    }
}

/// 上映一覧取得のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListShowTimesQuery {
    /// 曜日（例: "monday", "Mon"）。省略時は今日
    pub day: Option<String>,
}

/// 上映レスポンス（GET /showtimes）
#[derive(Debug, Serialize, Deserialize)]
pub struct ShowTimeResponse {
    pub show_time_id: String,
    pub movie_title: String,
    pub hall_id: String,
    pub start_time: DateTime<Utc>,
    /// 曜日名（例: "Monday"）
    pub day: String,
    /// 開始時刻（例: "18:30"）
    pub time: String,
}

impl From<ShowTimeReference> for ShowTimeResponse {
    fn from(show_time: ShowTimeReference) -> Self {
        Self {
            show_time_id: show_time.id().to_string(),
            movie_title: show_time.movie_title().to_string(),
            hall_id: show_time.hall_id().to_string(),
            start_time: show_time.start_time(),
            day: weekday_name(show_time.weekday()).to_string(),
            time: show_time.start_time().format("%H:%M").to_string(),
        }
    }
}

/// 空席状況レスポンス（GET /showtimes/:id/seats）
#[derive(Debug, Serialize, Deserialize)]
pub struct SeatAvailabilityResponse {
    pub show_time_id: String,
    pub total_seats: usize,
    pub available_seats: Vec<String>,
    pub booked_seats: Vec<String>,
}

impl SeatAvailabilityResponse {
    pub fn new(show_time_id: &ShowTimeId, availability: SeatAvailability) -> Self {
        Self {
            show_time_id: show_time_id.to_string(),
            total_seats: availability.total_seats,
            available_seats: availability
                .available_seats
                .iter()
                .map(|seat| seat.display())
                .collect(),
            booked_seats: availability
                .booked_seats
                .iter()
                .map(|seat| seat.display())
                .collect(),
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
