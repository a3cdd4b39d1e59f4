use crate::money_format::{format_currency, format_yen};
use tripmate_application::ExpenseRecord;
use tripmate_domain::{CurrencyCode, ExchangeRates, convert_to_jpy};

/// One line per non-yen record: the original amount, then its yen value.
///
/// Records whose rate is missing show the original amount only.
pub fn foreign_expense_lines<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
    rates: &ExchangeRates,
) -> Vec<String> {
    records
        .into_iter()
        .filter(|record| record.currency != CurrencyCode::Jpy)
        .map(|record| {
            let original = format_currency(record.amount, record.currency);
            match convert_to_jpy(record.amount, record.currency, rates) {
                Ok(yen) => format!("{original} ({})", format_yen(yen)),
                Err(_) => original,
            }
        })
        .collect()
}
