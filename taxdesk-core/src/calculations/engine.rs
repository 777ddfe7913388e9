//! The deduction engine: a validated set of limits plus the rules that
//! apply them.
//!
//! Each provision is implemented in its own module as an `impl` block on
//! [`DeductionEngine`]; this module only owns construction.

use super::limits::{DeductionLimits, DeductionLimitsError};

/// Calculator for every supported deduction and exemption.
///
/// The engine is immutable once built and every rule method is a pure,
/// infallible function of its inputs, so one instance may be shared freely
/// across threads.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxdesk_core::calculations::DeductionEngine;
///
/// let engine = DeductionEngine::statutory();
///
/// assert_eq!(engine.home_loan_interest(dec!(250000)), dec!(200000));
/// assert_eq!(engine.savings_interest(dec!(60000), 65), dec!(50000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionEngine {
    pub(super) limits: DeductionLimits,
}

impl DeductionEngine {
    /// Creates an engine from custom limits.
    ///
    /// # Errors
    ///
    /// Returns [`DeductionLimitsError`] if the limits fail validation.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use taxdesk_core::calculations::{DeductionEngine, DeductionLimits};
    ///
    /// let limits = DeductionLimits {
    ///     section_80c_cap: dec!(200000),
    ///     ..DeductionLimits::statutory()
    /// };
    ///
    /// let engine = DeductionEngine::new(limits).unwrap();
    /// assert_eq!(engine.limits().section_80c_cap, dec!(200000));
    /// ```
    pub fn new(limits: DeductionLimits) -> Result<Self, DeductionLimitsError> {
        limits.validate()?;
        Ok(Self { limits })
    }

    /// Creates an engine using the limits currently in force.
    pub fn statutory() -> Self {
        Self {
            limits: DeductionLimits::statutory(),
        }
    }

    /// The limits this engine applies.
    pub fn limits(&self) -> &DeductionLimits {
        &self.limits
    }
}

impl Default for DeductionEngine {
    fn default() -> Self {
        Self::statutory()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_accepts_valid_limits() {
        let engine = DeductionEngine::new(DeductionLimits::statutory());

        assert_eq!(engine, Ok(DeductionEngine::statutory()));
    }

    #[test]
    fn new_rejects_invalid_limits() {
        let limits = DeductionLimits {
            home_loan_interest_cap: dec!(-1),
            ..DeductionLimits::statutory()
        };

        let result = DeductionEngine::new(limits);

        assert_eq!(
            result,
            Err(DeductionLimitsError::NegativeCap {
                name: "home_loan_interest_cap",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn default_uses_statutory_limits() {
        let engine = DeductionEngine::default();

        assert_eq!(engine.limits(), &DeductionLimits::statutory());
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<DeductionEngine>();
    }
}
