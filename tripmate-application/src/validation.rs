//! Input limits enforced where expenses and members enter the system.
//!
//! The settlement engine itself stays permissive; these checks belong to the
//! layer that accepts user input.

use crate::error::ValidationError;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tripmate_domain::Money;

pub const MAX_TRIP_NAME: usize = 100;
pub const MAX_MEMBER_NAME: usize = 50;
pub const MAX_EXPENSE_AMOUNT: i64 = 100_000_000;

/// Counts characters, not bytes.
pub fn validate_length(
    value: &str,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

pub fn validate_amount(value: Decimal, field: &'static str) -> Result<Money, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::NegativeAmount { field });
    }
    if value > Decimal::from(MAX_EXPENSE_AMOUNT) {
        return Err(ValidationError::AmountTooLarge {
            field,
            max: MAX_EXPENSE_AMOUNT,
        });
    }
    if !value.fract().is_zero() {
        return Err(ValidationError::NonIntegralAmount { field });
    }

    // Bounded by MAX_EXPENSE_AMOUNT above.
    let amount = value
        .to_i64()
        .ok_or(ValidationError::AmountTooLarge {
            field,
            max: MAX_EXPENSE_AMOUNT,
        })?;
    Ok(Money::from_i64(amount))
}
