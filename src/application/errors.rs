use crate::domain::ValidationError;
use thiserror::Error;

/// 予約アプリケーション層のエラー
///
/// ビジネス上の結果（`BookingOutcome`）には含まれない、処理を継続できない失敗。
#[derive(Debug, Error)]
pub enum BookingApplicationError {
    /// 入力値が不正（空白の識別子、範囲外の座席など）
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// 上映照会のエラー
    #[error("Show time lookup error")]
    ShowTimeLookupError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 予約ストアのエラー
    #[error("Booking store error")]
    BookingStoreError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookingApplicationError>;
