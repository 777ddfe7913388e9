//! Deductions governed by a single ceiling.
//!
//! | Provision | Ceiling |
//! |-----------|---------|
//! | Section 24(b), self-occupied home loan interest | 2,00,000 |
//! | Section 80TTA / 80TTB, savings and deposit interest | 10,000, or 50,000 from age 60 |
//! | Section 80E, education loan interest | none |
//! | Section 80CCD(1B), additional NPS contribution | 50,000 |

use rust_decimal::Decimal;
use tracing::debug;

use super::common::cap;
use super::engine::DeductionEngine;

impl DeductionEngine {
    /// Deductible interest on a loan for a self-occupied property.
    pub fn home_loan_interest(
        &self,
        interest: Decimal,
    ) -> Decimal {
        cap(interest, self.limits.home_loan_interest_cap)
    }

    /// Deductible interest on savings accounts and deposits.
    ///
    /// The senior ceiling applies from `senior_age` (60) onwards.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::DeductionEngine;
    ///
    /// let engine = DeductionEngine::statutory();
    ///
    /// assert_eq!(engine.savings_interest(dec!(12000), 40), dec!(10000));
    /// assert_eq!(engine.savings_interest(dec!(12000), 60), dec!(12000));
    /// ```
    pub fn savings_interest(
        &self,
        interest: Decimal,
        age: u32,
    ) -> Decimal {
        let caps = &self.limits.savings_interest;
        let limit = if age >= caps.senior_age {
            caps.senior_cap
        } else {
            caps.cap
        };
        debug!(age, limit = %limit, "selected savings interest limit");
        cap(interest, limit)
    }

    /// Deductible interest on an education loan.
    ///
    /// No monetary limit applies, so the interest is returned unchanged.
    pub fn education_loan_interest(
        &self,
        interest: Decimal,
    ) -> Decimal {
        interest
    }

    /// Deductible additional contribution to the National Pension System.
    pub fn nps_contribution(
        &self,
        contribution: Decimal,
    ) -> Decimal {
        cap(contribution, self.limits.nps_additional_cap)
    }
}
