use crate::application::{BookingApplicationError, Result, ServiceDependencies};
use crate::domain::{self, Seat, commands::BookSeat};
use crate::ports::SaveBooking;

use super::BookingOutcome;

/// 座席を予約する（純粋な関数）
///
/// ビジネスルール（この順で検証し、最初に満たさないもので打ち切る）：
/// 1. 上映が存在すること
/// 2. 座席の列・番号が正しいこと（不正な場合はバリデーションエラー）
/// 3. 座席が上映スクリーンに存在すること
/// 4. この上映の座席がまだ予約されていないこと
///
/// すべての検証を通過した場合のみ予約を保存する。
/// すべての依存が引数として明示的に渡される（関数型の原則）。
///
/// # 一貫性保証
///
/// 4の存在確認と保存は別々の呼び出しになる。並行した予約との競合は
/// `BookingStore::save`の不可分な挿入で検出し、`SeatAlreadyBooked`として返す。
/// 同じ上映・座席に対して`Success`が2回返ることはない。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `cmd` - 予約コマンド
///
/// # エラー
/// - Validation: 座席の列・番号が不正
/// - ShowTimeLookupError / BookingStoreError: ポートのI/Oエラー（リトライしない）
pub async fn book_seat(deps: &ServiceDependencies, cmd: BookSeat) -> Result<BookingOutcome> {
    // 1. 上映の存在確認
    let show_time = deps
        .show_time_lookup
        .find_by_id(&cmd.show_time_id)
        .await
        .map_err(BookingApplicationError::ShowTimeLookupError)?;

    let Some(show_time) = show_time else {
        tracing::info!(show_time_id = %cmd.show_time_id, "show time not found");
        return Ok(BookingOutcome::ShowTimeNotFound {
            show_time_id: cmd.show_time_id,
        });
    };

    // 2. 座席の構築
    let seat = Seat::new(&cmd.seat_row, cmd.seat_number)?;

    // 3. スクリーンの座席確認
    let hall_seats = deps
        .show_time_lookup
        .get_all_seats_for_show_time(&cmd.show_time_id)
        .await
        .map_err(BookingApplicationError::ShowTimeLookupError)?;

    if !hall_seats.contains(&seat) {
        tracing::info!(%seat, hall_id = %show_time.hall_id(), "seat not in hall");
        return Ok(BookingOutcome::SeatNotInHall {
            seat,
            hall_id: show_time.hall_id().clone(),
        });
    }

    // 4. 予約済み確認
    let already_booked = deps
        .booking_store
        .exists_booking_for_seat(&cmd.show_time_id, &seat)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    if already_booked {
        tracing::info!(show_time_id = %cmd.show_time_id, %seat, "seat already booked");
        return Ok(BookingOutcome::SeatAlreadyBooked { seat });
    }

    // 5. ドメイン層の純粋関数を呼び出し
    let (booking, event) =
        domain::booking::book_seat(cmd.customer_id, cmd.show_time_id, seat, deps.clock.now());

    // 6. 予約ストアに保存
    let saved = deps
        .booking_store
        .save(booking)
        .await
        .map_err(BookingApplicationError::BookingStoreError)?;

    let booking = match saved {
        SaveBooking::Saved(booking) => booking,
        SaveBooking::SeatTaken => {
            // 4の確認後に別の予約が先に保存された
            tracing::warn!(show_time_id = %event.show_time_id, %seat, "seat taken concurrently");
            return Ok(BookingOutcome::SeatAlreadyBooked { seat });
        }
    };

    tracing::info!(
        booking_id = %event.booking_id,
        customer_id = %event.customer_id,
        show_time_id = %event.show_time_id,
        seat = %event.seat,
        booked_at = %event.booked_at,
        "seat booked"
    );

    Ok(BookingOutcome::Success {
        booking_id: booking.booking_id().clone(),
        seat_display: seat.display(),
        movie_title: show_time.movie_title().to_string(),
    })
}
