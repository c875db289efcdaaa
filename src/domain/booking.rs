use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{BookingId, CustomerId, Seat, SeatBooked, ShowTimeId};

/// Booking集約 - 1人の顧客による1上映1座席の予約
///
/// 作成後は変更されない（取消・変更は扱わない）。
/// 新規作成は`book_seat()`のみ、永続化層からの復元は`Booking::restore()`を使う。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    booking_id: BookingId,
    customer_id: CustomerId,
    seat: Seat,
    show_time_id: ShowTimeId,
    created_at: DateTime<Utc>,
}

impl Booking {
    /// 永続化された予約を復元する
    pub fn restore(
        booking_id: BookingId,
        customer_id: CustomerId,
        seat: Seat,
        show_time_id: ShowTimeId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id,
            customer_id,
            seat,
            show_time_id,
            created_at,
        }
    }

    pub fn booking_id(&self) -> &BookingId {
        &self.booking_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn show_time_id(&self) -> &ShowTimeId {
        &self.show_time_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 純粋関数：座席を予約する
///
/// 新しい予約IDを採番し、予約とイベントを返す。
/// 上映・座席・重複のバリデーションはアプリケーション層で完了している前提。
///
/// 副作用なし（ID採番を除く）。
pub fn book_seat(
    customer_id: CustomerId,
    show_time_id: ShowTimeId,
    seat: Seat,
    booked_at: DateTime<Utc>,
) -> (Booking, SeatBooked) {
    let booking = Booking {
        booking_id: BookingId::generate(),
        customer_id,
        seat,
        show_time_id,
        created_at: booked_at,
    };

    let event = SeatBooked {
        booking_id: booking.booking_id.clone(),
        customer_id: booking.customer_id.clone(),
        show_time_id: booking.show_time_id.clone(),
        seat,
        booked_at,
    };

    (booking, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_book_seat_creates_booking_and_event() {
        let customer_id = CustomerId::new("alice").unwrap();
        let show_time_id = ShowTimeId::new("show-1").unwrap();
        let seat = Seat::new("B", 4).unwrap();
        let booked_at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();

        let (booking, event) = book_seat(customer_id.clone(), show_time_id.clone(), seat, booked_at);

        assert_eq!(booking.customer_id(), &customer_id);
        assert_eq!(booking.show_time_id(), &show_time_id);
        assert_eq!(booking.seat(), seat);
        assert_eq!(booking.created_at(), booked_at);

        // イベントの検証
        assert_eq!(&event.booking_id, booking.booking_id());
        assert_eq!(event.customer_id, customer_id);
        assert_eq!(event.show_time_id, show_time_id);
        assert_eq!(event.seat, seat);
        assert_eq!(event.booked_at, booked_at);
    }

    #[test]
    fn test_book_seat_generates_distinct_ids() {
        let seat = Seat::new("A", 1).unwrap();
        let now = Utc::now();
        let (first, _) = book_seat(
            CustomerId::new("alice").unwrap(),
            ShowTimeId::new("show-1").unwrap(),
            seat,
            now,
        );
        let (second, _) = book_seat(
            CustomerId::new("bob").unwrap(),
            ShowTimeId::new("show-2").unwrap(),
            seat,
            now,
        );
        assert_ne!(first.booking_id(), second.booking_id());
    }

    #[test]
    fn test_restore_keeps_identity() {
        let booking_id = BookingId::new("booking-42").unwrap();
        let booking = Booking::restore(
            booking_id.clone(),
            CustomerId::new("carol").unwrap(),
            Seat::new("C", 3).unwrap(),
            ShowTimeId::new("show-9").unwrap(),
            Utc::now(),
        );
        assert_eq!(booking.booking_id(), &booking_id);
        assert_eq!(booking.seat().display(), "C3");
    }
}
