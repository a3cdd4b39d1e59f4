use rust_decimal::Decimal;
use std::fmt;
use tripmate_domain::{CurrencyCode, MemberBalance, MemberId, Money, Transfer};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TripId(String);

impl TripId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An expense row as stored, before conversion to yen.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub paid_by: Option<MemberId>,
    pub splits: Vec<MemberId>,
    pub is_settled: bool,
}

impl ExpenseRecord {
    pub fn yen<I>(amount: i64, paid_by: Option<MemberId>, splits: I) -> Self
    where
        I: IntoIterator<Item = MemberId>,
    {
        Self {
            amount: Decimal::from(amount),
            currency: CurrencyCode::Jpy,
            paid_by,
            splits: splits.into_iter().collect(),
            is_settled: false,
        }
    }

    pub fn in_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    pub fn settled(mut self) -> Self {
        self.is_settled = true;
        self
    }
}

/// Reference the engine could not attribute to the roster.
///
/// `expense_index` is the 1-based position among the records that took part
/// in the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettlementWarning {
    MissingPayer { expense_index: usize },
    UnknownPayer { expense_index: usize, member: MemberId },
    UnknownSplitMember { expense_index: usize, member: MemberId },
    EmptySplit { expense_index: usize },
}

#[derive(Debug)]
pub struct SettlementResult {
    pub balances: Vec<MemberBalance>,
    pub transfers: Vec<Transfer>,
    pub total_amount: Money,
    pub warnings: Vec<SettlementWarning>,
}

impl SettlementResult {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
