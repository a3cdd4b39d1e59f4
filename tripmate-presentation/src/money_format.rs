use rust_decimal::{Decimal, RoundingStrategy};
use tripmate_domain::{CurrencyCode, Money};

/// Inserts `,` every three digits: `1234567` becomes `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    push_grouped_digits(&mut grouped, &digits);
    grouped
}

fn push_grouped_digits(out: &mut String, digits: &str) {
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
}

pub fn format_yen(amount: Money) -> String {
    format!("{}{}", CurrencyCode::Jpy.symbol(), group_thousands(amount.amount()))
}

/// Signed variant used for balances: `+¥1,200`, `¥0`, `¥-1,200`.
pub fn format_signed_yen(amount: Money) -> String {
    if amount.is_positive() {
        format!("+{}", format_yen(amount))
    } else {
        format_yen(amount)
    }
}

/// Formats an amount in its own currency.
///
/// Yen carries no code prefix; other currencies are prefixed with their ISO
/// code. Currencies without a subunit are rounded to whole units, the rest
/// are shown with two decimals.
pub fn format_currency(amount: Decimal, currency: CurrencyCode) -> String {
    let prefix = if currency == CurrencyCode::Jpy {
        String::new()
    } else {
        format!("{} ", currency.code())
    };

    let body = if currency.is_zero_decimal() {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        group_decimal(rounded, 0)
    } else {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        group_decimal(rounded, 2)
    };

    format!("{prefix}{}{body}", currency.symbol())
}

fn group_decimal(amount: Decimal, decimals: u32) -> String {
    let mut scaled = amount;
    scaled.rescale(decimals);
    let text = scaled.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3 + 1);
    if amount.is_sign_negative() && !amount.is_zero() {
        grouped.push('-');
    }
    push_grouped_digits(&mut grouped, integer);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
