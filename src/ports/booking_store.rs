use crate::domain::{Booking, BookingId, Seat, ShowTimeId};
use async_trait::async_trait;

pub use super::Result;

/// 予約保存の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveBooking {
    /// 保存された予約（IDは変わらない）
    Saved(Booking),
    /// 同じ上映・座席の予約が既に存在したため保存しなかった
    SeatTaken,
}

/// 予約ストアポート
///
/// 予約の永続化と座席の予約状況の照会を抽象化する。
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// 上映の予約済み座席を取得する
    async fn find_booked_seats_for_show_time(
        &self,
        show_time_id: &ShowTimeId,
    ) -> Result<Vec<Seat>>;

    /// 上映のこの座席に予約が存在するか確認する
    ///
    /// `save`と矛盾しない結果を返すこと。
    async fn exists_booking_for_seat(
        &self,
        show_time_id: &ShowTimeId,
        seat: &Seat,
    ) -> Result<bool>;

    /// 予約を保存する
    ///
    /// (上映ID, 座席)が同じ予約が既にある場合は保存せず`SeatTaken`を返す。
    /// 存在確認と挿入は不可分に行うこと。並行した2つの`save`が
    /// 両方とも`Saved`になってはならない。
    async fn save(&self, booking: Booking) -> Result<SaveBooking>;

    /// IDで予約を取得する
    async fn find_by_id(&self, booking_id: &BookingId) -> Result<Option<Booking>>;
}
