use crate::domain::{Booking, BookingId, Seat, ShowTimeId};
use crate::ports::booking_store::{BookingStore as BookingStoreTrait, Result, SaveBooking};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, PoisonError};

/// BookingStoreのインメモリ実装
///
/// 予約は（上映, 座席）をキーに保持する。`save` の存在確認と挿入は同じロックの中で行うため、
/// 同じ座席への同時保存は1件しか成功しない。
#[derive(Default)]
pub struct BookingStore {
    bookings: Mutex<HashMap<(ShowTimeId, Seat), Booking>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全上映の予約件数
    pub fn len(&self) -> usize {
        self.bookings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BookingStoreTrait for BookingStore {
    async fn find_booked_seats_for_show_time(
        &self,
        show_time_id: &ShowTimeId,
    ) -> Result<Vec<Seat>> {
        let bookings = self.bookings.lock().unwrap_or_else(PoisonError::into_inner);
        let mut seats: Vec<Seat> = bookings
            .keys()
            .filter(|(id, _)| id == show_time_id)
            .map(|(_, seat)| *seat)
            .collect();
        seats.sort();
        Ok(seats)
    }

    async fn exists_booking_for_seat(
        &self,
        show_time_id: &ShowTimeId,
        seat: &Seat,
    ) -> Result<bool> {
        let bookings = self.bookings.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(bookings.contains_key(&(show_time_id.clone(), *seat)))
    }

    async fn save(&self, booking: Booking) -> Result<SaveBooking> {
        let mut bookings = self.bookings.lock().unwrap_or_else(PoisonError::into_inner);
        match bookings.entry((booking.show_time_id().clone(), booking.seat())) {
            Entry::Occupied(_) => Ok(SaveBooking::SeatTaken),
            Entry::Vacant(slot) => {
                slot.insert(booking.clone());
                Ok(SaveBooking::Saved(booking))
            }
        }
    }

    async fn find_by_id(&self, booking_id: &BookingId) -> Result<Option<Booking>> {
        let bookings = self.bookings.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(bookings
            .values()
            .find(|booking| booking.booking_id() == booking_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, booking::book_seat};
    use chrono::Utc;

    fn new_booking(show_time: &str, seat: &str, customer: &str) -> Booking {
        let (booking, _) = book_seat(
            CustomerId::new(customer).unwrap(),
            ShowTimeId::new(show_time).unwrap(),
            seat.parse().unwrap(),
            Utc::now(),
        );
        booking
    }

    #[tokio::test]
    async fn test_save_then_exists() {
        let store = BookingStore::new();
        let booking = new_booking("show-1", "B4", "alice");
        let booking_id = booking.booking_id().clone();

        let saved = store.save(booking.clone()).await.unwrap();
        assert_eq!(saved, SaveBooking::Saved(booking));

        let show_time_id = ShowTimeId::new("show-1").unwrap();
        let seat: Seat = "B4".parse().unwrap();
        assert!(store.exists_booking_for_seat(&show_time_id, &seat).await.unwrap());
        assert!(store.find_by_id(&booking_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_seat() {
        let store = BookingStore::new();
        store.save(new_booking("show-1", "B4", "alice")).await.unwrap();

        let second = store.save(new_booking("show-1", "B4", "bob")).await.unwrap();
        assert_eq!(second, SaveBooking::SeatTaken);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_same_seat_in_other_show_time_is_independent() {
        let store = BookingStore::new();
        store.save(new_booking("show-1", "B4", "alice")).await.unwrap();

        let other = store.save(new_booking("show-2", "B4", "bob")).await.unwrap();
        assert!(matches!(other, SaveBooking::Saved(_)));

        let booked = store
            .find_booked_seats_for_show_time(&ShowTimeId::new("show-2").unwrap())
            .await
            .unwrap();
        assert_eq!(booked, vec!["B4".parse::<Seat>().unwrap()]);
    }

    #[tokio::test]
    async fn test_booked_seats_sorted() {
        let store = BookingStore::new();
        for seat in ["C1", "A5", "B3", "A6"] {
            store.save(new_booking("show-1", seat, "alice")).await.unwrap();
        }

        let booked = store
            .find_booked_seats_for_show_time(&ShowTimeId::new("show-1").unwrap())
            .await
            .unwrap();
        let labels: Vec<String> = booked.iter().map(Seat::display).collect();
        assert_eq!(labels, vec!["A5", "A6", "B3", "C1"]);
    }
}
