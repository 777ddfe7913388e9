//! Common utility functions for deduction calculations.
//!
//! This module provides the small arithmetic helpers shared by every
//! deduction rule: clamping to a floor and clipping to a statutory ceiling.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Arguments
///
/// * `a` - First decimal value
/// * `b` - Second decimal value
///
/// # Returns
///
/// The larger of the two values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxdesk_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Clips an amount to a statutory ceiling.
///
/// Amounts at or below the ceiling are returned unchanged.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxdesk_core::calculations::common::cap;
///
/// assert_eq!(cap(dec!(250000), dec!(200000)), dec!(200000));
/// assert_eq!(cap(dec!(150000), dec!(200000)), dec!(150000));
/// ```
pub fn cap(
    amount: Decimal,
    ceiling: Decimal,
) -> Decimal {
    amount.min(ceiling)
}
