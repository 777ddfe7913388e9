//! House Rent Allowance exemption under Section 10(13A).
//!
//! The exempt portion of HRA is the least of:
//!
//! | Candidate | Amount |
//! |-----------|--------|
//! | 1 | HRA actually received |
//! | 2 | 50% of basic salary in a metro city, 40% elsewhere |
//! | 3 | Rent paid minus 10% of basic salary (never below zero) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxdesk_core::calculations::{HraInput, compute_hra_exemption};
//!
//! let input = HraInput {
//!     basic_salary: dec!(600000),
//!     hra_received: dec!(240000),
//!     rent_paid: dec!(300000),
//!     is_metro_city: true,
//! };
//!
//! // min(240000, 300000, 300000 - 60000)
//! assert_eq!(compute_hra_exemption(&input), dec!(240000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::max;
use super::engine::DeductionEngine;

/// Salary and rent figures for one HRA computation.
///
/// Amounts are assumed non-negative; they are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraInput {
    pub basic_salary: Decimal,
    pub hra_received: Decimal,
    pub rent_paid: Decimal,
    pub is_metro_city: bool,
}

/// The three candidate amounts and the exemption chosen from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HraResult {
    /// Candidate 1: HRA received.
    pub hra_received: Decimal,

    /// Candidate 2: the metro or non-metro share of basic salary.
    pub salary_share: Decimal,

    /// Candidate 3: rent paid in excess of the basic salary offset.
    pub excess_rent: Decimal,

    /// Least of the three candidates.
    pub exemption: Decimal,

    /// Portion of HRA received that remains taxable.
    pub taxable_hra: Decimal,
}

impl DeductionEngine {
    /// Calculates the exempt portion of HRA.
    pub fn hra_exemption(
        &self,
        input: &HraInput,
    ) -> Decimal {
        self.hra_breakdown(input).exemption
    }

    /// Calculates the HRA exemption along with each candidate amount.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionEngine, HraInput};
    ///
    /// let result = DeductionEngine::statutory().hra_breakdown(&HraInput {
    ///     basic_salary: dec!(500000),
    ///     hra_received: dec!(250000),
    ///     rent_paid: dec!(180000),
    ///     is_metro_city: false,
    /// });
    ///
    /// assert_eq!(result.salary_share, dec!(200000));
    /// assert_eq!(result.excess_rent, dec!(130000));
    /// assert_eq!(result.exemption, dec!(130000));
    /// assert_eq!(result.taxable_hra, dec!(120000));
    /// ```
    pub fn hra_breakdown(
        &self,
        input: &HraInput,
    ) -> HraResult {
        let salary_share = self.hra_salary_share(input.basic_salary, input.is_metro_city);
        let excess_rent = self.hra_excess_rent(input.basic_salary, input.rent_paid);

        let exemption = input.hra_received.min(salary_share).min(excess_rent);

        debug!(
            hra_received = %input.hra_received,
            salary_share = %salary_share,
            excess_rent = %excess_rent,
            exemption = %exemption,
            "computed HRA exemption"
        );

        HraResult {
            hra_received: input.hra_received,
            salary_share,
            excess_rent,
            exemption,
            taxable_hra: input.hra_received - exemption,
        }
    }

    /// Candidate 2: basic salary times the metro or non-metro rate.
    fn hra_salary_share(
        &self,
        basic_salary: Decimal,
        is_metro_city: bool,
    ) -> Decimal {
        let rate = if is_metro_city {
            self.limits.hra.metro_rate
        } else {
            self.limits.hra.non_metro_rate
        };
        basic_salary * rate
    }

    /// Candidate 3: rent paid less the basic salary offset, floored at zero.
    fn hra_excess_rent(
        &self,
        basic_salary: Decimal,
        rent_paid: Decimal,
    ) -> Decimal {
        max(
            rent_paid - basic_salary * self.limits.hra.rent_offset_rate,
            Decimal::ZERO,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        basic_salary: Decimal,
        hra_received: Decimal,
        rent_paid: Decimal,
        is_metro_city: bool,
    ) -> HraInput {
        HraInput {
            basic_salary,
            hra_received,
            rent_paid,
            is_metro_city,
        }
    }

    #[test]
    fn hra_received_is_the_binding_limit() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_exemption(&input(dec!(600000), dec!(120000), dec!(300000), true));

        assert_eq!(result, dec!(120000));
    }

    #[test]
    fn metro_salary_share_is_the_binding_limit() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_breakdown(&input(dec!(400000), dec!(300000), dec!(500000), true));

        assert_eq!(result.salary_share, dec!(200000));
        assert_eq!(result.exemption, dec!(200000));
    }

    #[test]
    fn non_metro_uses_forty_percent() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_breakdown(&input(dec!(400000), dec!(300000), dec!(500000), false));

        assert_eq!(result.salary_share, dec!(160000));
        assert_eq!(result.exemption, dec!(160000));
    }

    #[test]
    fn excess_rent_is_the_binding_limit() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_breakdown(&input(dec!(600000), dec!(240000), dec!(120000), true));

        assert_eq!(result.excess_rent, dec!(60000));
        assert_eq!(result.exemption, dec!(60000));
        assert_eq!(result.taxable_hra, dec!(180000));
    }

    #[test]
    fn rent_below_offset_yields_zero_exemption() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_breakdown(&input(dec!(600000), dec!(240000), dec!(50000), true));

        assert_eq!(result.excess_rent, Decimal::ZERO);
        assert_eq!(result.exemption, Decimal::ZERO);
        assert_eq!(result.taxable_hra, dec!(240000));
    }

    #[test]
    fn no_rent_paid_yields_zero_exemption() {
        let result = crate::calculations::compute_hra_exemption(&input(
            dec!(300000),
            dec!(90000),
            dec!(0),
            false,
        ));

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn exemption_is_minimum_of_all_candidates() {
        let engine = DeductionEngine::statutory();
        let cases = [
            input(dec!(550000), dec!(210000), dec!(264000), true),
            input(dec!(480000), dec!(96000), dec!(150000), false),
            input(dec!(1200000), dec!(480000), dec!(360000), true),
            input(dec!(0), dec!(0), dec!(0), false),
            input(dec!(333333.33), dec!(100000), dec!(99999.99), true),
        ];

        for case in &cases {
            let result = engine.hra_breakdown(case);
            let expected = result
                .hra_received
                .min(result.salary_share)
                .min(result.excess_rent);

            assert_eq!(result.exemption, expected);
            assert!(result.exemption <= case.hra_received);
            assert!(result.exemption <= result.salary_share);
            assert!(result.exemption <= result.excess_rent);
        }
    }

    #[test]
    fn fractional_salary_is_computed_exactly() {
        let engine = DeductionEngine::statutory();

        let result = engine.hra_breakdown(&input(dec!(12345.67), dec!(10000), dec!(9000), false));

        assert_eq!(result.salary_share, dec!(4938.2680));
        assert_eq!(result.excess_rent, dec!(7765.4330));
        assert_eq!(result.exemption, dec!(4938.2680));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let engine = DeductionEngine::statutory();
        let case = input(dec!(550000), dec!(210000), dec!(264000), true);

        assert_eq!(engine.hra_breakdown(&case), engine.hra_breakdown(&case));
    }
}
