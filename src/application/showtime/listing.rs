use crate::application::{BookingApplicationError, Result, ServiceDependencies};
use crate::domain::ShowTimeReference;
use chrono::Weekday;

/// 曜日別の上映一覧を取得する
///
/// 指定した曜日に開始する上映を開始時刻順に返す。
/// 開始時刻が同じ場合は上映IDの順。
pub async fn list_show_times_for_day(
    deps: &ServiceDependencies,
    day: Weekday,
) -> Result<Vec<ShowTimeReference>> {
    let mut show_times = deps
        .show_time_lookup
        .find_by_day(day)
        .await
        .map_err(BookingApplicationError::ShowTimeLookupError)?;

    show_times.sort_by(|a, b| {
        a.start_time()
            .cmp(&b.start_time())
            .then_with(|| a.id().value().cmp(b.id().value()))
    });

    Ok(show_times)
}
