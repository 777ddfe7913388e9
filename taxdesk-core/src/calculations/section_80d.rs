//! Section 80D: medical insurance premiums and preventive health check-ups.
//!
//! Unlike Section 80C, each category is capped on its own before summing:
//!
//! | Category | Ceiling |
//! |----------|---------|
//! | Self, spouse and children | 25,000, or 50,000 if the taxpayer is a senior citizen |
//! | Parents | 25,000, or 50,000 if either parent is a senior citizen |
//! | Preventive health check-up | 5,000 |
//!
//! The breakdown reports the amounts after capping, together with the
//! ceilings that were selected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::common::cap;
use super::engine::DeductionEngine;

/// Premiums paid under each Section 80D category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section80DInput {
    pub self_and_family: Decimal,
    pub parents: Decimal,
    pub preventive_health_checkup: Decimal,
    pub is_parent_senior: bool,
    pub is_self_senior: bool,
}

/// Allowed amount per category after capping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80DBreakdown {
    pub self_and_family: Decimal,
    pub parents: Decimal,
    pub preventive_health_checkup: Decimal,
}

/// Ceilings selected for this computation and the amount used against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80DLimits {
    pub self_and_family: Decimal,
    pub parents: Decimal,
    pub preventive_health_checkup: Decimal,
    pub total_used: Decimal,
}

impl Section80DLimits {
    /// Sum of the three selected ceilings.
    pub fn total_available(&self) -> Decimal {
        self.self_and_family + self.parents + self.preventive_health_checkup
    }
}

/// Result of a Section 80D computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section80DResult {
    pub total: Decimal,
    pub breakdown: Section80DBreakdown,
    pub limits: Section80DLimits,
}

impl DeductionEngine {
    /// Calculates the Section 80D deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionEngine, Section80DInput};
    ///
    /// let input = Section80DInput {
    ///     self_and_family: dec!(30000),
    ///     parents: dec!(60000),
    ///     preventive_health_checkup: dec!(6000),
    ///     is_parent_senior: true,
    ///     is_self_senior: false,
    /// };
    ///
    /// let result = DeductionEngine::statutory().section_80d(&input);
    ///
    /// assert_eq!(result.breakdown.self_and_family, dec!(25000));
    /// assert_eq!(result.breakdown.parents, dec!(50000));
    /// assert_eq!(result.breakdown.preventive_health_checkup, dec!(5000));
    /// assert_eq!(result.total, dec!(80000));
    /// ```
    pub fn section_80d(
        &self,
        input: &Section80DInput,
    ) -> Section80DResult {
        let caps = &self.limits.section_80d;

        let self_limit = if input.is_self_senior {
            caps.self_senior_cap
        } else {
            caps.self_cap
        };
        let parents_limit = if input.is_parent_senior {
            caps.parents_senior_cap
        } else {
            caps.parents_cap
        };
        let checkup_limit = caps.preventive_checkup_cap;

        let breakdown = Section80DBreakdown {
            self_and_family: capped_category("self_and_family", input.self_and_family, self_limit),
            parents: capped_category("parents", input.parents, parents_limit),
            preventive_health_checkup: capped_category(
                "preventive_health_checkup",
                input.preventive_health_checkup,
                checkup_limit,
            ),
        };
        let total =
            breakdown.self_and_family + breakdown.parents + breakdown.preventive_health_checkup;

        debug!(total = %total, "computed Section 80D deduction");

        Section80DResult {
            total,
            breakdown,
            limits: Section80DLimits {
                self_and_family: self_limit,
                parents: parents_limit,
                preventive_health_checkup: checkup_limit,
                total_used: total,
            },
        }
    }
}

fn capped_category(
    category: &'static str,
    amount: Decimal,
    limit: Decimal,
) -> Decimal {
    if amount > limit {
        warn!(
            category,
            amount = %amount,
            limit = %limit,
            "Section 80D premium exceeds category limit"
        );
    }
    cap(amount, limit)
}
