#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const BALANCE: &str = "収支";
    pub const TOTAL: &str = "合計";
    pub const UNKNOWN_MEMBER: &str = "不明";
    pub const SETTLEMENT_COMPLETE: &str = "精算完了";
    pub const SETTLEMENT_REQUEST: &str = "精算のお願い";
    pub const SETTLEMENT_DETAILS: &str = "精算内容";
    pub const NO_SETTLEMENT_NEEDED: &str = "精算の必要はありません！🎉";
    pub const SHARE_FOOTER: &str = "TripMateで管理中 ✈️";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "精算の計算に失敗しました";
    pub const FOREIGN_EXPENSES: &str = "外貨の支出";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const TOTAL: &str = "Total";
    pub const UNKNOWN_MEMBER: &str = "Unknown";
    pub const SETTLEMENT_COMPLETE: &str = "Settlement complete";
    pub const SETTLEMENT_REQUEST: &str = "Settlement request";
    pub const SETTLEMENT_DETAILS: &str = "Settlement details";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed! 🎉";
    pub const SHARE_FOOTER: &str = "Managed with TripMate ✈️";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const FOREIGN_EXPENSES: &str = "Foreign-currency expenses";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const TOTAL: &str = "Total";
    pub const UNKNOWN_MEMBER: &str = "Unknown";
    pub const SETTLEMENT_COMPLETE: &str = "Settlement complete";
    pub const SETTLEMENT_REQUEST: &str = "Settlement request";
    pub const SETTLEMENT_DETAILS: &str = "Settlement details";
    pub const NO_SETTLEMENT_NEEDED: &str = "No settlement needed! 🎉";
    pub const SHARE_FOOTER: &str = "Managed with TripMate ✈️";
    pub const SETTLEMENT_CALCULATION_FAILED: &str = "Settlement calculation failed";
    pub const FOREIGN_EXPENSES: &str = "Foreign-currency expenses";
}

pub use strings::*;

/// `【trip】title`, the first line of every share message.
pub fn share_heading(trip_label: impl std::fmt::Display, title: &str) -> String {
    format!("【{trip_label}】{title}")
}

#[cfg(feature = "ja")]
pub fn orphaned_reference(expense_index: usize, member: impl std::fmt::Display) -> String {
    format!("支出 #{expense_index}: メンバー '{member}' は旅行メンバーに含まれていません")
}

#[cfg(feature = "ja")]
pub fn missing_payer(expense_index: usize) -> String {
    format!("支出 #{expense_index}: 支払者が設定されていません")
}

#[cfg(feature = "ja")]
pub fn empty_split(expense_index: usize) -> String {
    format!("支出 #{expense_index}: 割り勘の対象者がいないため精算から除外しました")
}

#[cfg(feature = "en")]
pub fn orphaned_reference(expense_index: usize, member: impl std::fmt::Display) -> String {
    format!("Expense #{expense_index}: member '{member}' is not part of the trip")
}

#[cfg(feature = "en")]
pub fn missing_payer(expense_index: usize) -> String {
    format!("Expense #{expense_index}: no payer is set")
}

#[cfg(feature = "en")]
pub fn empty_split(expense_index: usize) -> String {
    format!("Expense #{expense_index}: nobody shares this expense, so it was skipped")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn orphaned_reference(expense_index: usize, member: impl std::fmt::Display) -> String {
    format!("Expense #{expense_index}: member '{member}' is not part of the trip")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn missing_payer(expense_index: usize) -> String {
    format!("Expense #{expense_index}: no payer is set")
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub fn empty_split(expense_index: usize) -> String {
    format!("Expense #{expense_index}: nobody shares this expense, so it was skipped")
}
