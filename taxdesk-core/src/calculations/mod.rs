//! Indian income-tax deduction and exemption rules.
//!
//! Every rule is a pure function of its inputs and the configured
//! [`DeductionLimits`]. [`DeductionEngine`] carries the limits; the free
//! functions in this module apply the statutory limits directly.
//!
//! Amounts are assumed to be non-negative. They are never validated or
//! rounded, so callers receive exact values in rupees.

pub mod common;
mod engine;
mod hra;
mod limits;
mod section_80c;
mod section_80d;
mod single_cap;
mod summary;

use std::sync::OnceLock;

use rust_decimal::Decimal;

pub use engine::DeductionEngine;
pub use hra::{HraInput, HraResult};
pub use limits::{
    DeductionLimits, DeductionLimitsError, HraRates, SavingsInterestCaps, Section80DCaps,
};
pub use section_80c::{Section80CInput, Section80CResult};
pub use section_80d::{Section80DBreakdown, Section80DInput, Section80DLimits, Section80DResult};
pub use summary::{DeductionSummary, SavingsInterestInput, TaxpayerDeductions};

fn statutory_engine() -> &'static DeductionEngine {
    static ENGINE: OnceLock<DeductionEngine> = OnceLock::new();
    ENGINE.get_or_init(DeductionEngine::statutory)
}

/// Exempt portion of HRA under the statutory rates.
pub fn compute_hra_exemption(input: &HraInput) -> Decimal {
    statutory_engine().hra_exemption(input)
}

/// Section 80C deduction under the statutory aggregate limit.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxdesk_core::calculations::{Section80CInput, compute_section_80c};
///
/// let result = compute_section_80c(&Section80CInput {
///     ppf: dec!(50000),
///     nsc: dec!(40000),
///     ..Section80CInput::default()
/// });
///
/// assert_eq!(result.total, dec!(90000));
/// assert!(!result.max_reached);
/// ```
pub fn compute_section_80c(input: &Section80CInput) -> Section80CResult {
    statutory_engine().section_80c(input)
}

/// Section 80D deduction under the statutory category limits.
pub fn compute_section_80d(input: &Section80DInput) -> Section80DResult {
    statutory_engine().section_80d(input)
}

/// Self-occupied home loan interest under the statutory limit.
pub fn compute_home_loan_interest(interest: Decimal) -> Decimal {
    statutory_engine().home_loan_interest(interest)
}

/// Savings and deposit interest under the age-tiered statutory limit.
pub fn compute_savings_interest(
    interest: Decimal,
    age: u32,
) -> Decimal {
    statutory_engine().savings_interest(interest, age)
}

/// Education loan interest. No limit applies.
pub fn compute_education_loan_interest(interest: Decimal) -> Decimal {
    statutory_engine().education_loan_interest(interest)
}

/// Additional NPS contribution under the statutory limit.
pub fn compute_nps_contribution(contribution: Decimal) -> Decimal {
    statutory_engine().nps_contribution(contribution)
}
