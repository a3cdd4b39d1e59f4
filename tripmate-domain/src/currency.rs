use crate::model::Money;
use fxhash::FxHashMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurrencyCode {
    Jpy,
    Usd,
    Eur,
    Gbp,
    Krw,
    Cny,
    Twd,
    Thb,
    Vnd,
    Sgd,
    Aud,
    Cad,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 12] = [
        Self::Jpy,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Krw,
        Self::Cny,
        Self::Twd,
        Self::Thb,
        Self::Vnd,
        Self::Sgd,
        Self::Aud,
        Self::Cad,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Jpy => "JPY",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Krw => "KRW",
            Self::Cny => "CNY",
            Self::Twd => "TWD",
            Self::Thb => "THB",
            Self::Vnd => "VND",
            Self::Sgd => "SGD",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Jpy | Self::Cny => "¥",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Krw => "₩",
            Self::Twd => "NT$",
            Self::Thb => "฿",
            Self::Vnd => "₫",
            Self::Sgd => "S$",
            Self::Aud => "A$",
            Self::Cad => "C$",
        }
    }

    /// Currencies without a fractional subunit.
    pub fn is_zero_decimal(self) -> bool {
        matches!(self, Self::Jpy | Self::Krw | Self::Vnd)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| CurrencyError::UnknownCurrency(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("Unknown currency code '{0}'")]
    UnknownCurrency(String),
    #[error("No exchange rate available for {0}")]
    MissingRate(CurrencyCode),
    #[error("Converted amount is out of range")]
    OutOfRange,
}

/// JPY-based rate table: `rate(USD) = 0.0067` means 1 JPY buys 0.0067 USD.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExchangeRates {
    rates: FxHashMap<CurrencyCode, Decimal>,
}

impl ExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, currency: CurrencyCode, rate: Decimal) -> Self {
        self.insert(currency, rate);
        self
    }

    pub fn insert(&mut self, currency: CurrencyCode, rate: Decimal) {
        self.rates.insert(currency, rate);
    }

    pub fn rate(&self, currency: CurrencyCode) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }
}

/// Converts `amount` in `currency` to whole yen, rounding half away from zero.
pub fn convert_to_jpy(
    amount: Decimal,
    currency: CurrencyCode,
    rates: &ExchangeRates,
) -> Result<Money, CurrencyError> {
    let yen = if currency == CurrencyCode::Jpy {
        amount
    } else {
        let rate = rates
            .rate(currency)
            .filter(|rate| !rate.is_zero())
            .ok_or(CurrencyError::MissingRate(currency))?;
        amount
            .checked_div(rate)
            .ok_or(CurrencyError::OutOfRange)?
    };

    yen.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .map(Money::from_i64)
        .ok_or(CurrencyError::OutOfRange)
}
