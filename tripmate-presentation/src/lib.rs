#![warn(clippy::uninlined_format_args)]

pub mod expense_presenter;
pub mod money_format;
pub mod settlement_presenter;
pub mod warning_presenter;

pub use expense_presenter::foreign_expense_lines;
pub use settlement_presenter::{BalanceRow, BalanceTone, SettlementPresenter, SettlementView};
pub use warning_presenter::format_settlement_warning;
