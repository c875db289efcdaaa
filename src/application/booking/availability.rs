use crate::application::{BookingApplicationError, Result, ServiceDependencies};
use crate::domain::{
    ShowTimeId,
    availability::{SeatAvailability, partition_seats},
};

/// 上映の空席状況を計算する
///
/// 上映の全座席と予約済み座席をそれぞれ1回ずつ照会し、
/// 空席と予約済みに分割する。副作用なし。
///
/// 存在しない上映や座席が設定されていない上映では空の結果
/// （`total_seats == 0`）を返す。上映の存在確認は呼び出し側の責務。
pub async fn compute_availability(
    deps: &ServiceDependencies,
    show_time_id: &ShowTimeId,
) -> Result<SeatAvailability> {
    // 1. スクリーンの全座席を取得
    let all_seats = deps
        .show_time_lookup
        .get_all_seats_for_show_time(show_time_id)
        .await
        .map_err(BookingApplicationError::ShowTimeLookupError)?;

    // 2. 予約済み座席を取得
    let booked_seats = deps
        .booking_store
        .find_booked_seats_for_show_time(show_time_id)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    // 3. ドメイン層の純粋関数で分割
    let availability = partition_seats(&all_seats, &booked_seats);

    tracing::debug!(
        show_time_id = %show_time_id,
        available = availability.available_seats.len(),
        booked = availability.booked_seats.len(),
        "computed seat availability"
    );

    Ok(availability)
}
