use crate::domain::{HallId, Seat, ShowTimeId, ShowTimeReference};
use crate::ports::show_time_lookup::{Result, ShowTimeLookup};
use async_trait::async_trait;
use chrono::Weekday;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// ShowTimeLookupのインメモリ実装
///
/// スクリーンと上映は事前に登録する。
/// 未登録のスクリーンを使う上映は座席を持たない。
#[derive(Default)]
pub struct ShowTimeCatalog {
    halls: Mutex<HashMap<HallId, Vec<Seat>>>,
    show_times: Mutex<HashMap<ShowTimeId, ShowTimeReference>>,
}

impl ShowTimeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// スクリーンの座席を登録（既存なら置き換え）
    pub fn add_hall(&self, hall_id: HallId, seats: Vec<Seat>) {
        self.halls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(hall_id, seats);
    }

    /// 上映を登録（既存なら置き換え）
    pub fn add_show_time(&self, show_time: ShowTimeReference) {
        self.show_times
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(show_time.id().clone(), show_time);
    }
}

#[async_trait]
impl ShowTimeLookup for ShowTimeCatalog {
    async fn find_by_id(&self, show_time_id: &ShowTimeId) -> Result<Option<ShowTimeReference>> {
        let show_times = self.show_times.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(show_times.get(show_time_id).cloned())
    }

    async fn get_all_seats_for_show_time(&self, show_time_id: &ShowTimeId) -> Result<Vec<Seat>> {
        let hall_id = {
            let show_times = self.show_times.lock().unwrap_or_else(PoisonError::into_inner);
            match show_times.get(show_time_id) {
                Some(show_time) => show_time.hall_id().clone(),
                None => return Ok(Vec::new()),
            }
        };

        let halls = self.halls.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(halls.get(&hall_id).cloned().unwrap_or_default())
    }

    async fn find_by_day(&self, day: Weekday) -> Result<Vec<ShowTimeReference>> {
        let show_times = self.show_times.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(show_times
            .values()
            .filter(|show_time| show_time.weekday() == day)
            .cloned()
            .collect())
    }
}
