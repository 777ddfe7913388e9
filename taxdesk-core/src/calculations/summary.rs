//! Combined evaluation of every provision for one taxpayer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::engine::DeductionEngine;
use super::hra::HraInput;
use super::section_80c::Section80CInput;
use super::section_80d::Section80DInput;

/// Interest earned on savings and deposits, with the holder's age.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsInterestInput {
    pub interest: Decimal,
    pub age: u32,
}

/// Inputs for every provision a taxpayer claims. Absent provisions
/// contribute zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxpayerDeductions {
    pub hra: Option<HraInput>,
    pub section_80c: Option<Section80CInput>,
    pub section_80d: Option<Section80DInput>,
    pub home_loan_interest: Option<Decimal>,
    pub savings_interest: Option<SavingsInterestInput>,
    pub education_loan_interest: Option<Decimal>,
    pub nps_contribution: Option<Decimal>,
}

/// Allowed amount per provision and the combined reduction in taxable
/// income.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub hra_exemption: Decimal,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub home_loan_interest: Decimal,
    pub savings_interest: Decimal,
    pub education_loan_interest: Decimal,
    pub nps_contribution: Decimal,
    pub total: Decimal,
}

impl DeductionEngine {
    /// Evaluates every claimed provision and totals the allowed amounts.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionEngine, TaxpayerDeductions};
    ///
    /// let claims = TaxpayerDeductions {
    ///     home_loan_interest: Some(dec!(250000)),
    ///     nps_contribution: Some(dec!(20000)),
    ///     ..TaxpayerDeductions::default()
    /// };
    ///
    /// let summary = DeductionEngine::statutory().summarize(&claims);
    ///
    /// assert_eq!(summary.home_loan_interest, dec!(200000));
    /// assert_eq!(summary.total, dec!(220000));
    /// ```
    pub fn summarize(
        &self,
        claims: &TaxpayerDeductions,
    ) -> DeductionSummary {
        let hra_exemption = claims
            .hra
            .as_ref()
            .map_or(Decimal::ZERO, |input| self.hra_exemption(input));
        let section_80c = claims
            .section_80c
            .as_ref()
            .map_or(Decimal::ZERO, |input| self.section_80c(input).total);
        let section_80d = claims
            .section_80d
            .as_ref()
            .map_or(Decimal::ZERO, |input| self.section_80d(input).total);
        let home_loan_interest = claims
            .home_loan_interest
            .map_or(Decimal::ZERO, |interest| self.home_loan_interest(interest));
        let savings_interest = claims
            .savings_interest
            .as_ref()
            .map_or(Decimal::ZERO, |input| {
                self.savings_interest(input.interest, input.age)
            });
        let education_loan_interest = claims
            .education_loan_interest
            .map_or(Decimal::ZERO, |interest| {
                self.education_loan_interest(interest)
            });
        let nps_contribution = claims
            .nps_contribution
            .map_or(Decimal::ZERO, |amount| self.nps_contribution(amount));

        let total = hra_exemption
            + section_80c
            + section_80d
            + home_loan_interest
            + savings_interest
            + education_loan_interest
            + nps_contribution;

        debug!(total = %total, "summarized taxpayer deductions");

        DeductionSummary {
            hra_exemption,
            section_80c,
            section_80d,
            home_loan_interest,
            savings_interest,
            education_loan_interest,
            nps_contribution,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_claims_yield_zero_summary() {
        let summary = DeductionEngine::statutory().summarize(&TaxpayerDeductions::default());

        assert_eq!(summary, DeductionSummary::default());
    }

    #[test]
    fn every_provision_is_evaluated_and_totalled() {
        let claims = TaxpayerDeductions {
            hra: Some(HraInput {
                basic_salary: dec!(600000),
                hra_received: dec!(240000),
                rent_paid: dec!(120000),
                is_metro_city: true,
            }),
            section_80c: Some(Section80CInput {
                ppf: dec!(100000),
                elss: dec!(60000),
                ..Section80CInput::default()
            }),
            section_80d: Some(Section80DInput {
                self_and_family: dec!(30000),
                parents: dec!(60000),
                preventive_health_checkup: dec!(6000),
                is_parent_senior: true,
                is_self_senior: false,
            }),
            home_loan_interest: Some(dec!(250000)),
            savings_interest: Some(SavingsInterestInput {
                interest: dec!(12000),
                age: 40,
            }),
            education_loan_interest: Some(dec!(45000)),
            nps_contribution: Some(dec!(60000)),
        };

        let summary = DeductionEngine::statutory().summarize(&claims);

        assert_eq!(
            summary,
            DeductionSummary {
                hra_exemption: dec!(60000),
                section_80c: dec!(150000),
                section_80d: dec!(80000),
                home_loan_interest: dec!(200000),
                savings_interest: dec!(10000),
                education_loan_interest: dec!(45000),
                nps_contribution: dec!(50000),
                total: dec!(595000),
            }
        );
    }
}
