//! Statutory caps and rates used by the deduction engine.
//!
//! Every ceiling and percentage the rules apply lives here rather than in
//! the rule bodies, so an assessment year with revised limits is a
//! configuration change. [`DeductionLimits::statutory`] returns the limits
//! currently in force.
//!
//! | Provision | Limit |
//! |-----------|-------|
//! | HRA, metro city | 50% of basic salary |
//! | HRA, non-metro city | 40% of basic salary |
//! | HRA, rent offset | rent paid minus 10% of basic salary |
//! | Section 80C | 1,50,000 aggregate |
//! | Section 80D, self and family | 25,000 (50,000 if senior) |
//! | Section 80D, parents | 25,000 (50,000 if senior) |
//! | Section 80D, preventive check-up | 5,000 |
//! | Section 24(b), self-occupied home loan interest | 2,00,000 |
//! | Section 80TTA / 80TTB | 10,000 / 50,000 from age 60 |
//! | Section 80CCD(1B) | 50,000 |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a set of limits is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionLimitsError {
    /// A percentage must be between 0 and 1.
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidRate { name: &'static str, value: Decimal },

    /// A monetary ceiling must be non-negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeCap { name: &'static str, value: Decimal },

    /// The senior citizen age threshold must be positive.
    #[error("senior citizen age must be positive, got {0}")]
    InvalidSeniorAge(u32),
}

/// Percentages applied by the HRA exemption formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HraRates {
    /// Share of basic salary allowed when living in a metro city.
    pub metro_rate: Decimal,

    /// Share of basic salary allowed elsewhere.
    pub non_metro_rate: Decimal,

    /// Share of basic salary subtracted from rent paid.
    pub rent_offset_rate: Decimal,
}

impl Default for HraRates {
    fn default() -> Self {
        Self {
            metro_rate: Decimal::new(50, 2),
            non_metro_rate: Decimal::new(40, 2),
            rent_offset_rate: Decimal::new(10, 2),
        }
    }
}

/// Per-category ceilings for medical insurance premiums under Section 80D.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section80DCaps {
    pub self_cap: Decimal,
    pub self_senior_cap: Decimal,
    pub parents_cap: Decimal,
    pub parents_senior_cap: Decimal,

    /// Applies regardless of age.
    pub preventive_checkup_cap: Decimal,
}

impl Default for Section80DCaps {
    fn default() -> Self {
        Self {
            self_cap: Decimal::from(25_000),
            self_senior_cap: Decimal::from(50_000),
            parents_cap: Decimal::from(25_000),
            parents_senior_cap: Decimal::from(50_000),
            preventive_checkup_cap: Decimal::from(5_000),
        }
    }
}

/// Age-tiered ceiling for savings and deposit interest (80TTA / 80TTB).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsInterestCaps {
    /// Ceiling below the senior age (80TTA).
    pub cap: Decimal,

    /// Ceiling at or above the senior age (80TTB).
    pub senior_cap: Decimal,

    /// Age at which the senior ceiling starts to apply.
    pub senior_age: u32,
}

impl Default for SavingsInterestCaps {
    fn default() -> Self {
        Self {
            cap: Decimal::from(10_000),
            senior_cap: Decimal::from(50_000),
            senior_age: 60,
        }
    }
}

/// Complete set of limits consumed by [`DeductionEngine`](super::DeductionEngine).
///
/// Deserializes with every field defaulted, so a configuration file only
/// needs to name the limits it overrides.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxdesk_core::calculations::DeductionLimits;
///
/// let limits = DeductionLimits::statutory();
///
/// assert_eq!(limits.section_80c_cap, dec!(150000));
/// assert_eq!(limits.savings_interest.senior_age, 60);
/// assert_eq!(limits.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeductionLimits {
    pub hra: HraRates,

    /// Aggregate ceiling across all Section 80C instruments.
    pub section_80c_cap: Decimal,

    pub section_80d: Section80DCaps,

    /// Ceiling on interest for a self-occupied property.
    pub home_loan_interest_cap: Decimal,

    pub savings_interest: SavingsInterestCaps,

    /// Ceiling on the additional NPS contribution under 80CCD(1B).
    pub nps_additional_cap: Decimal,
}

impl Default for DeductionLimits {
    fn default() -> Self {
        Self::statutory()
    }
}

impl DeductionLimits {
    /// Returns the limits currently in force.
    pub fn statutory() -> Self {
        Self {
            hra: HraRates::default(),
            section_80c_cap: Decimal::from(150_000),
            section_80d: Section80DCaps::default(),
            home_loan_interest_cap: Decimal::from(200_000),
            savings_interest: SavingsInterestCaps::default(),
            nps_additional_cap: Decimal::from(50_000),
        }
    }

    /// Validates the configured limits.
    ///
    /// Taxpayer inputs are never checked here; this only guards against a
    /// malformed configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionLimitsError`] if:
    /// - any HRA rate is outside [0, 1]
    /// - any ceiling is negative
    /// - the senior citizen age is zero
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionLimits, DeductionLimitsError};
    ///
    /// let limits = DeductionLimits {
    ///     nps_additional_cap: dec!(-1),
    ///     ..DeductionLimits::statutory()
    /// };
    ///
    /// assert_eq!(
    ///     limits.validate(),
    ///     Err(DeductionLimitsError::NegativeCap {
    ///         name: "nps_additional_cap",
    ///         value: dec!(-1),
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), DeductionLimitsError> {
        check_rate("hra.metro_rate", self.hra.metro_rate)?;
        check_rate("hra.non_metro_rate", self.hra.non_metro_rate)?;
        check_rate("hra.rent_offset_rate", self.hra.rent_offset_rate)?;

        check_cap("section_80c_cap", self.section_80c_cap)?;
        check_cap("section_80d.self_cap", self.section_80d.self_cap)?;
        check_cap(
            "section_80d.self_senior_cap",
            self.section_80d.self_senior_cap,
        )?;
        check_cap("section_80d.parents_cap", self.section_80d.parents_cap)?;
        check_cap(
            "section_80d.parents_senior_cap",
            self.section_80d.parents_senior_cap,
        )?;
        check_cap(
            "section_80d.preventive_checkup_cap",
            self.section_80d.preventive_checkup_cap,
        )?;
        check_cap("home_loan_interest_cap", self.home_loan_interest_cap)?;
        check_cap("savings_interest.cap", self.savings_interest.cap)?;
        check_cap(
            "savings_interest.senior_cap",
            self.savings_interest.senior_cap,
        )?;
        check_cap("nps_additional_cap", self.nps_additional_cap)?;

        if self.savings_interest.senior_age == 0 {
            return Err(DeductionLimitsError::InvalidSeniorAge(
                self.savings_interest.senior_age,
            ));
        }
        Ok(())
    }
}

fn check_rate(
    name: &'static str,
    value: Decimal,
) -> Result<(), DeductionLimitsError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(DeductionLimitsError::InvalidRate { name, value });
    }
    Ok(())
}

fn check_cap(
    name: &'static str,
    value: Decimal,
) -> Result<(), DeductionLimitsError> {
    if value < Decimal::ZERO {
        return Err(DeductionLimitsError::NegativeCap { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn statutory_limits_are_valid() {
        let result = DeductionLimits::statutory().validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn default_matches_statutory() {
        assert_eq!(DeductionLimits::default(), DeductionLimits::statutory());
    }

    #[test]
    fn statutory_80d_caps_sum_to_105000_for_seniors() {
        let caps = DeductionLimits::statutory().section_80d;

        let total = caps.self_senior_cap + caps.parents_senior_cap + caps.preventive_checkup_cap;

        assert_eq!(total, dec!(105000));
    }

    #[test]
    fn validate_rejects_metro_rate_above_one() {
        let limits = DeductionLimits {
            hra: HraRates {
                metro_rate: dec!(1.5),
                ..HraRates::default()
            },
            ..DeductionLimits::statutory()
        };

        let result = limits.validate();

        assert_eq!(
            result,
            Err(DeductionLimitsError::InvalidRate {
                name: "hra.metro_rate",
                value: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_rent_offset_rate() {
        let limits = DeductionLimits {
            hra: HraRates {
                rent_offset_rate: dec!(-0.1),
                ..HraRates::default()
            },
            ..DeductionLimits::statutory()
        };

        let result = limits.validate();

        assert_eq!(
            result,
            Err(DeductionLimitsError::InvalidRate {
                name: "hra.rent_offset_rate",
                value: dec!(-0.1),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_80c_cap() {
        let limits = DeductionLimits {
            section_80c_cap: dec!(-150000),
            ..DeductionLimits::statutory()
        };

        let result = limits.validate();

        assert_eq!(
            result,
            Err(DeductionLimitsError::NegativeCap {
                name: "section_80c_cap",
                value: dec!(-150000),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_preventive_checkup_cap() {
        let limits = DeductionLimits {
            section_80d: Section80DCaps {
                preventive_checkup_cap: dec!(-1),
                ..Section80DCaps::default()
            },
            ..DeductionLimits::statutory()
        };

        let result = limits.validate();

        assert_eq!(
            result,
            Err(DeductionLimitsError::NegativeCap {
                name: "section_80d.preventive_checkup_cap",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_accepts_zero_caps() {
        let limits = DeductionLimits {
            home_loan_interest_cap: Decimal::ZERO,
            nps_additional_cap: Decimal::ZERO,
            ..DeductionLimits::statutory()
        };

        assert_eq!(limits.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_senior_age() {
        let limits = DeductionLimits {
            savings_interest: SavingsInterestCaps {
                senior_age: 0,
                ..SavingsInterestCaps::default()
            },
            ..DeductionLimits::statutory()
        };

        let result = limits.validate();

        assert_eq!(result, Err(DeductionLimitsError::InvalidSeniorAge(0)));
    }
}
