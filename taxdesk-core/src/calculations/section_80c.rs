//! Section 80C: aggregate deduction for specified investments and payments.
//!
//! The eight qualifying instruments are summed and only the aggregate is
//! capped (1,50,000). Individual categories are never capped, and the
//! breakdown reports the amounts exactly as entered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::common::{cap, max};
use super::engine::DeductionEngine;

/// Contributions towards each Section 80C instrument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section80CInput {
    /// Public Provident Fund.
    pub ppf: Decimal,

    /// Equity Linked Savings Scheme.
    pub elss: Decimal,

    /// Life insurance premiums.
    pub lic: Decimal,

    /// National Savings Certificate.
    pub nsc: Decimal,

    /// Five-year tax-saver fixed deposit.
    pub tax_saver_fd: Decimal,

    /// Tuition fees for up to two children.
    pub tuition_fees: Decimal,

    /// Principal repaid on a housing loan.
    pub home_loan_principal: Decimal,

    /// Sukanya Samriddhi Yojana.
    pub sukanya_samriddhi: Decimal,
}

impl Section80CInput {
    /// Uncapped sum of all eight instruments.
    pub fn gross_total(&self) -> Decimal {
        self.ppf
            + self.elss
            + self.lic
            + self.nsc
            + self.tax_saver_fd
            + self.tuition_fees
            + self.home_loan_principal
            + self.sukanya_samriddhi
    }
}

/// Result of a Section 80C computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80CResult {
    /// Allowed deduction: the gross total clipped to the limit.
    pub total: Decimal,

    /// Raw contributions as entered.
    pub breakdown: Section80CInput,

    /// The aggregate ceiling that was applied.
    pub limit: Decimal,

    /// Whether the uncapped total meets or exceeds the ceiling.
    pub max_reached: bool,
}

impl Section80CResult {
    /// Headroom left under the ceiling.
    pub fn remaining(&self) -> Decimal {
        max(self.limit - self.total, Decimal::ZERO)
    }
}

impl DeductionEngine {
    /// Calculates the Section 80C deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionEngine, Section80CInput};
    ///
    /// let input = Section80CInput {
    ///     ppf: dec!(100000),
    ///     elss: dec!(60000),
    ///     ..Section80CInput::default()
    /// };
    ///
    /// let result = DeductionEngine::statutory().section_80c(&input);
    ///
    /// assert_eq!(result.total, dec!(150000));
    /// assert!(result.max_reached);
    /// assert_eq!(result.breakdown.elss, dec!(60000));
    /// ```
    pub fn section_80c(
        &self,
        input: &Section80CInput,
    ) -> Section80CResult {
        let limit = self.limits.section_80c_cap;
        let gross_total = input.gross_total();
        let total = cap(gross_total, limit);
        let max_reached = gross_total >= limit;

        if gross_total > limit {
            warn!(
                gross_total = %gross_total,
                limit = %limit,
                "Section 80C contributions exceed the aggregate limit; excess is not deductible"
            );
        } else {
            debug!(gross_total = %gross_total, limit = %limit, "computed Section 80C deduction");
        }

        Section80CResult {
            total,
            breakdown: input.clone(),
            limit,
            max_reached,
        }
    }
}
