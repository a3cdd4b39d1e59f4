#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod model;
pub mod services;

pub use currency::{CurrencyCode, CurrencyError, ExchangeRates, convert_to_jpy};
pub use model::{
    Expense, ExpenseBuildError, Member, MemberBalance, MemberBuildError, MemberId, Money,
    SplitSet, Transfer,
};
pub use services::{BalanceCalculator, SettlementPlanner};
