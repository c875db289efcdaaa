use crate::domain::{BookingId, HallId, Seat, ShowTimeId};

/// 座席予約の結果
///
/// 想定されるビジネス上の結果をすべて列挙した閉じた型。
/// 呼び出し側はすべての場合を網羅的に扱うこと。
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// 予約が確定した
    Success {
        booking_id: BookingId,
        /// 座席の表示形式（例: "B4"）
        seat_display: String,
        movie_title: String,
    },
    /// この上映の座席は既に予約されている
    SeatAlreadyBooked { seat: Seat },
    /// 上映が存在しない
    ShowTimeNotFound { show_time_id: ShowTimeId },
    /// 座席が上映スクリーンに存在しない
    SeatNotInHall { seat: Seat, hall_id: HallId },
}
