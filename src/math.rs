use crate::types::PlannerError;
use rust_decimal::Decimal;

/// A `Decimal` wrapper with checked arithmetic that reports overflow as
/// `PlannerError::Overflow` instead of panicking, carrying an optional
/// source label for error attribution.
///
/// Division by zero is not an error here: the cushion metric is defined as
/// zero when monthly expenses are zero, so `safe_div` encodes that
/// convention directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerDecimal {
    value: Decimal,
    source: Option<String>,
}

impl PlannerDecimal {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            source: None,
        }
    }

    /// Attaches a label used in overflow error messages.
    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn safe_add(self, rhs: Decimal) -> Result<Self, PlannerError> {
        let value = self
            .value
            .checked_add(rhs)
            .ok_or_else(|| PlannerError::Overflow {
                operation: format!("{} + {}", self.value, rhs),
                source_label: self.source.clone(),
            })?;
        Ok(Self { value, ..self })
    }

    pub fn safe_sub(self, rhs: Decimal) -> Result<Self, PlannerError> {
        let value = self
            .value
            .checked_sub(rhs)
            .ok_or_else(|| PlannerError::Overflow {
                operation: format!("{} - {}", self.value, rhs),
                source_label: self.source.clone(),
            })?;
        Ok(Self { value, ..self })
    }

    /// Checked division with the degenerate-divisor convention: a zero
    /// divisor yields zero, never an error.
    pub fn safe_div(self, rhs: Decimal) -> Result<Self, PlannerError> {
        if rhs.is_zero() {
            return Ok(Self {
                value: Decimal::ZERO,
                ..self
            });
        }
        let value = self
            .value
            .checked_div(rhs)
            .ok_or_else(|| PlannerError::Overflow {
                operation: format!("{} / {}", self.value, rhs),
                source_label: self.source.clone(),
            })?;
        Ok(Self { value, ..self })
    }
}

impl std::ops::Deref for PlannerDecimal {
    type Target = Decimal;

    fn deref(&self) -> &Decimal {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_sub_allows_negative_results() {
        let res = PlannerDecimal::new(dec!(1000)).safe_sub(dec!(1200)).unwrap();
        assert_eq!(*res, dec!(-200));
    }

    #[test]
    fn test_safe_div_zero_divisor_is_zero() {
        let res = PlannerDecimal::new(dec!(3800)).safe_div(dec!(0)).unwrap();
        assert_eq!(*res, Decimal::ZERO);
    }

    #[test]
    fn test_safe_div_exact() {
        let res = PlannerDecimal::new(dec!(3800)).safe_div(dec!(3200)).unwrap();
        assert_eq!(*res, dec!(1.1875));
    }

    #[test]
    fn test_overflow_carries_source_label() {
        let res = PlannerDecimal::new(Decimal::MAX)
            .with_source(Some("cash".to_string()))
            .safe_add(Decimal::MAX);
        match res {
            Err(PlannerError::Overflow { source_label, .. }) => {
                assert_eq!(source_label.as_deref(), Some("cash"));
            }
            other => panic!("Expected overflow, got {:?}", other),
        }
    }
}
