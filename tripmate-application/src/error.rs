use tripmate_domain::{CurrencyError, ExpenseBuildError, Money};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to fetch data: {0}")]
    Request(String),
    #[error("Trip '{0}' was not found")]
    TripNotFound(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettlementBuildError {
    #[error("Failed to load the member roster: {0}")]
    Roster(#[source] SourceError),
    #[error("Failed to load expenses: {0}")]
    Expenses(#[source] SourceError),
    #[error("Failed to load exchange rates: {0}")]
    ExchangeRates(#[source] SourceError),
    #[error("Expense #{index} could not be converted to yen: {source}")]
    Currency {
        index: usize,
        #[source]
        source: CurrencyError,
    },
    #[error("Expense #{index} is {amount} yen, more than the {max} yen limit")]
    AmountTooLarge { index: usize, amount: Money, max: i64 },
    #[error("Expense #{index} is invalid: {source}")]
    InvalidExpense {
        index: usize,
        #[source]
        source: ExpenseBuildError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be at most {max} characters (found {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
    #[error("{field} must be at most {max} yen")]
    AmountTooLarge { field: &'static str, max: i64 },
    #[error("{field} must be a whole number")]
    NonIntegralAmount { field: &'static str },
}
