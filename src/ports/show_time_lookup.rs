use crate::domain::{Seat, ShowTimeId, ShowTimeReference};
use async_trait::async_trait;
use chrono::Weekday;

pub use super::Result;

/// 上映照会ポート
///
/// 予約コンテキストと上映スケジュールコンテキストの境界を維持する。
/// 予約コンテキストは上映の射影（ShowTimeReference）と座席一覧のみを知る。
#[async_trait]
pub trait ShowTimeLookup: Send + Sync {
    /// IDで上映を取得する
    ///
    /// 存在しない場合は`None`を返す。
    async fn find_by_id(&self, show_time_id: &ShowTimeId) -> Result<Option<ShowTimeReference>>;

    /// 上映のスクリーンの全座席を取得する
    ///
    /// スクリーンの座席順で返す。座席が設定されていない、
    /// または上映が存在しない場合は空の一覧を返す。
    async fn get_all_seats_for_show_time(&self, show_time_id: &ShowTimeId) -> Result<Vec<Seat>>;

    /// 指定した曜日に開始する上映を取得する
    ///
    /// 曜日別の上映一覧表示に使用される。順序は問わない。
    async fn find_by_day(&self, day: Weekday) -> Result<Vec<ShowTimeReference>>;
}
