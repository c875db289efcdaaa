use std::collections::HashSet;

use serde::Serialize;

use super::Seat;

/// 上映の空席状況
///
/// 座席一覧を空席と予約済みに分割したもの。
/// `total_seats`は常に`available_seats.len() + booked_seats.len()`と等しい。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatAvailability {
    pub available_seats: Vec<Seat>,
    pub booked_seats: Vec<Seat>,
    pub total_seats: usize,
}

impl SeatAvailability {
    pub fn is_sold_out(&self) -> bool {
        self.available_seats.is_empty()
    }
}

/// 純粋関数：座席一覧を空席と予約済みに分割する
///
/// - 両方の結果は`all_seats`の順序を保つ
/// - `all_seats`に含まれない予約済み座席は無視する
/// - 同じ座席が重複して予約済みとして渡されても一度だけ数える
pub fn partition_seats(all_seats: &[Seat], booked: &[Seat]) -> SeatAvailability {
    let booked: HashSet<Seat> = booked.iter().copied().collect();

    let (booked_seats, available_seats): (Vec<Seat>, Vec<Seat>) =
        all_seats.iter().copied().partition(|seat| booked.contains(seat));

    SeatAvailability {
        total_seats: available_seats.len() + booked_seats.len(),
        available_seats,
        booked_seats,
    }
}
