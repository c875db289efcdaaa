use crate::ports::{BookingStore, Clock, ShowTimeLookup};
use std::sync::Arc;

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、アプリケーション層の関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub show_time_lookup: Arc<dyn ShowTimeLookup>,
    pub booking_store: Arc<dyn BookingStore>,
    pub clock: Arc<dyn Clock>,
}
