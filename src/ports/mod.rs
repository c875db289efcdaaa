#[allow(unused_imports)]
pub mod booking_store;
#[allow(unused_imports)]
pub mod clock;
#[allow(unused_imports)]
pub mod show_time_lookup;

/// ポート共通の Result型
///
/// アダプター固有のエラーはそのまま呼び出し側に伝播する。
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[allow(unused_imports)]
pub use booking_store::*;
#[allow(unused_imports)]
pub use clock::*;
#[allow(unused_imports)]
pub use show_time_lookup::*;
