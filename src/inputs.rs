use crate::types::PlannerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trait for converting various types into `Decimal` for planner fields.
///
/// This trait allows users to pass `i32`, `f64`, `&str`, etc. directly into
/// constructors without needing to wrap them in `dec!()` or `Decimal::from()`.
/// Non-finite floats (`NaN`, infinities) fail conversion here, which is the
/// single point where they can enter the engine.
pub trait IntoPlannerDecimal {
    fn into_planner_decimal(self) -> Result<Decimal, PlannerError>;
}

// Implement for Decimal (passthrough)
impl IntoPlannerDecimal for Decimal {
    fn into_planner_decimal(self) -> Result<Decimal, PlannerError> {
        Ok(self)
    }
}

// Implement for Integers
macro_rules! impl_into_planner_decimal_int {
    ($($t:ty),*) => {
        $(
            impl IntoPlannerDecimal for $t {
                fn into_planner_decimal(self) -> Result<Decimal, PlannerError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_planner_decimal_int!(i32, u32, i64, u64, isize, usize);

// Implement for Floats
macro_rules! impl_into_planner_decimal_float {
    ($($t:ty),*) => {
        $(
            impl IntoPlannerDecimal for $t {
                fn into_planner_decimal(self) -> Result<Decimal, PlannerError> {
                    Decimal::from_f64_retain(self as f64).ok_or_else(|| {
                        PlannerError::InvalidInput {
                            field: "value".to_string(),
                            reason: format!("Invalid float value: {}", self),
                        }
                    })
                }
            }
        )*
    };
}

impl_into_planner_decimal_float!(f32, f64);

// Implement for Strings
impl IntoPlannerDecimal for &str {
    fn into_planner_decimal(self) -> Result<Decimal, PlannerError> {
        Decimal::from_str(self).map_err(|e| PlannerError::InvalidInput {
            field: "value".to_string(),
            reason: format!("Invalid string format: {}", e),
        })
    }
}

impl IntoPlannerDecimal for String {
    fn into_planner_decimal(self) -> Result<Decimal, PlannerError> {
        self.as_str().into_planner_decimal()
    }
}

/// The four figures as they arrive from the input collector (sliders or
/// number fields), before any normalization. Kept as `f64` because that is
/// what UI widgets and JSON bodies produce; out-of-range and non-finite
/// values are handled by the active input policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub cash_balance: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub purchase_cost: f64,
}

impl RawInputs {
    pub fn new(
        cash_balance: f64,
        monthly_income: f64,
        monthly_expenses: f64,
        purchase_cost: f64,
    ) -> Self {
        Self {
            cash_balance,
            monthly_income,
            monthly_expenses,
            purchase_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_conversion_from_int_and_str() {
        assert_eq!(5000.into_planner_decimal().unwrap(), dec!(5000));
        assert_eq!("1234.5".into_planner_decimal().unwrap(), dec!(1234.5));
    }

    #[test]
    fn test_nan_fails_conversion() {
        let res = f64::NAN.into_planner_decimal();
        assert!(matches!(res, Err(PlannerError::InvalidInput { .. })));
    }

    #[test]
    fn test_infinity_fails_conversion() {
        assert!(f64::INFINITY.into_planner_decimal().is_err());
        assert!(f64::NEG_INFINITY.into_planner_decimal().is_err());
    }
}
