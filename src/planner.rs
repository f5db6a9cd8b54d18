//! The affordability planner: input normalization, derived statistics and
//! zone classification.
//!
//! The engine is pure and synchronous. Each assessment is an independent
//! function of its inputs; there is no caching, no history and no shared
//! mutable state, so callers may invoke it on every input change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PlannerConfig;
use crate::format::clamp_meter_progress;
use crate::inputs::{IntoPlannerDecimal, RawInputs};
use crate::math::PlannerDecimal;
use crate::policy::NormalizationRules;
use crate::types::{AffordabilityReport, CalculationStep, PlannerError};
use crate::zone::{ZoneKey, classify_zone};

/// The four validated planner figures.
///
/// Invariant: all fields are non-negative once constructed through
/// [`PlannerInputs::new`] or [`PlannerInputs::from_raw`]. Derived values
/// (projected cash, monthly net) may still be negative; the invariant only
/// covers the inputs themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerInputs {
    /// Cash currently available.
    pub cash_balance: Decimal,
    /// Average monthly income.
    pub monthly_income: Decimal,
    /// Average monthly recurring expense.
    pub monthly_expenses: Decimal,
    /// Price of the prospective purchase.
    pub purchase_cost: Decimal,
}

impl PlannerInputs {
    /// Creates inputs from already-trusted values, rejecting negatives.
    pub fn new(
        cash_balance: impl IntoPlannerDecimal,
        monthly_income: impl IntoPlannerDecimal,
        monthly_expenses: impl IntoPlannerDecimal,
        purchase_cost: impl IntoPlannerDecimal,
    ) -> Result<Self, PlannerError> {
        let inputs = Self {
            cash_balance: cash_balance.into_planner_decimal()?,
            monthly_income: monthly_income.into_planner_decimal()?,
            monthly_expenses: monthly_expenses.into_planner_decimal()?,
            purchase_cost: purchase_cost.into_planner_decimal()?,
        };
        inputs.reject_negative_fields()?;
        Ok(inputs)
    }

    /// Normalizes raw UI input under the configured policy.
    ///
    /// Lenient: non-finite values become 0, negatives floor at 0 and a
    /// configured ceiling clamps. Strict: any of those conditions rejects
    /// with [`PlannerError::InvalidInput`] before computation.
    pub fn from_raw(raw: &RawInputs, config: &PlannerConfig) -> Result<Self, PlannerError> {
        let rules = config.policy.strategy().rules();
        Ok(Self {
            cash_balance: normalize_field("cash_balance", raw.cash_balance, &rules, config)?,
            monthly_income: normalize_field("monthly_income", raw.monthly_income, &rules, config)?,
            monthly_expenses: normalize_field(
                "monthly_expenses",
                raw.monthly_expenses,
                &rules,
                config,
            )?,
            purchase_cost: normalize_field("purchase_cost", raw.purchase_cost, &rules, config)?,
        })
    }

    /// Re-applies the policy to already-decimal fields. Used by the
    /// calculator at assessment time so values injected through fluent
    /// setters still honor the invariant.
    pub fn normalized(&self, config: &PlannerConfig) -> Result<Self, PlannerError> {
        let rules = config.policy.strategy().rules();
        Ok(Self {
            cash_balance: apply_bounds("cash_balance", self.cash_balance, &rules, config)?,
            monthly_income: apply_bounds("monthly_income", self.monthly_income, &rules, config)?,
            monthly_expenses: apply_bounds(
                "monthly_expenses",
                self.monthly_expenses,
                &rules,
                config,
            )?,
            purchase_cost: apply_bounds("purchase_cost", self.purchase_cost, &rules, config)?,
        })
    }

    fn reject_negative_fields(&self) -> Result<(), PlannerError> {
        for (name, value) in self.fields() {
            if value < Decimal::ZERO {
                return Err(PlannerError::InvalidInput {
                    field: name.to_string(),
                    reason: "Value must be non-negative".to_string(),
                });
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(&'static str, Decimal); 4] {
        [
            ("cash_balance", self.cash_balance),
            ("monthly_income", self.monthly_income),
            ("monthly_expenses", self.monthly_expenses),
            ("purchase_cost", self.purchase_cost),
        ]
    }
}

fn normalize_field(
    name: &str,
    raw: f64,
    rules: &NormalizationRules,
    config: &PlannerConfig,
) -> Result<Decimal, PlannerError> {
    let value = match Decimal::from_f64_retain(raw) {
        Some(v) => v,
        None => {
            if rules.reject_non_finite {
                return Err(PlannerError::InvalidInput {
                    field: name.to_string(),
                    reason: format!("Value must be a finite number, got {}", raw),
                });
            }
            tracing::warn!(field = name, value = raw, "Non-finite input substituted with 0");
            Decimal::ZERO
        }
    };
    apply_bounds(name, value, rules, config)
}

fn apply_bounds(
    name: &str,
    value: Decimal,
    rules: &NormalizationRules,
    config: &PlannerConfig,
) -> Result<Decimal, PlannerError> {
    let value = if value < Decimal::ZERO {
        if rules.reject_negative {
            return Err(PlannerError::InvalidInput {
                field: name.to_string(),
                reason: "Value must be non-negative".to_string(),
            });
        }
        tracing::warn!(field = name, "Negative input floored at 0");
        Decimal::ZERO
    } else {
        value
    };

    if let Some(ceiling) = config.field_ceiling {
        if value > ceiling {
            if rules.reject_above_ceiling {
                return Err(PlannerError::InvalidInput {
                    field: name.to_string(),
                    reason: format!("Value exceeds the configured ceiling of {}", ceiling),
                });
            }
            tracing::warn!(field = name, %ceiling, "Input clamped to ceiling");
            return Ok(ceiling);
        }
    }

    Ok(value)
}

/// Trait to be implemented by affordability calculators.
pub trait AssessAffordability {
    /// Runs the assessment against the given configuration.
    fn assess(&self, config: &PlannerConfig) -> Result<AffordabilityReport, PlannerError>;

    /// Returns the label of the plan, if any.
    fn get_label(&self) -> Option<String> {
        None
    }

    /// Returns the stable unique identifier for this plan.
    fn get_id(&self) -> uuid::Uuid;
}

/// Async version of the AssessAffordability trait.
///
/// This trait is automatically implemented for any type that implements
/// `AssessAffordability + Send + Sync`.
#[cfg(feature = "async")]
#[async_trait::async_trait]
pub trait AsyncAssessAffordability: Send + Sync {
    /// Runs the assessment asynchronously.
    async fn assess_async(
        &self,
        config: &PlannerConfig,
    ) -> Result<AffordabilityReport, PlannerError>;

    /// Returns the label of the plan, if any.
    fn get_label(&self) -> Option<String> {
        None
    }

    /// Returns the stable unique identifier for this plan.
    fn get_id(&self) -> uuid::Uuid;
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl<T> AsyncAssessAffordability for T
where
    T: AssessAffordability + Sync + Send,
{
    async fn assess_async(
        &self,
        config: &PlannerConfig,
    ) -> Result<AffordabilityReport, PlannerError> {
        self.assess(config)
    }

    fn get_label(&self) -> Option<String> {
        self.get_label()
    }

    fn get_id(&self) -> uuid::Uuid {
        self.get_id()
    }
}

/// Calculator for a single prospective purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityPlanner {
    pub inputs: PlannerInputs,
    pub label: Option<String>,
    pub id: uuid::Uuid,
}

impl Default for AffordabilityPlanner {
    fn default() -> Self {
        Self {
            inputs: PlannerInputs::default(),
            label: None,
            id: uuid::Uuid::new_v4(),
        }
    }
}

impl AffordabilityPlanner {
    pub fn new(inputs: PlannerInputs) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    /// Builds a planner straight from raw UI input, normalizing under the
    /// configured policy.
    pub fn from_raw(raw: &RawInputs, config: &PlannerConfig) -> Result<Self, PlannerError> {
        Ok(Self::new(PlannerInputs::from_raw(raw, config)?))
    }

    pub fn cash(mut self, value: impl IntoPlannerDecimal) -> Self {
        if let Ok(v) = value.into_planner_decimal() {
            self.inputs.cash_balance = v;
        }
        self
    }

    pub fn income(mut self, value: impl IntoPlannerDecimal) -> Self {
        if let Ok(v) = value.into_planner_decimal() {
            self.inputs.monthly_income = v;
        }
        self
    }

    pub fn expenses(mut self, value: impl IntoPlannerDecimal) -> Self {
        if let Ok(v) = value.into_planner_decimal() {
            self.inputs.monthly_expenses = v;
        }
        self
    }

    pub fn purchase(mut self, value: impl IntoPlannerDecimal) -> Self {
        if let Ok(v) = value.into_planner_decimal() {
            self.inputs.purchase_cost = v;
        }
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl AssessAffordability for AffordabilityPlanner {
    fn assess(&self, config: &PlannerConfig) -> Result<AffordabilityReport, PlannerError> {
        // Fluent setters accept anything convertible, so the invariant is
        // re-established here under the active policy.
        let inputs = self.inputs.normalized(config)?;

        let projected_cash = PlannerDecimal::new(inputs.cash_balance)
            .with_source(self.label.clone())
            .safe_sub(inputs.purchase_cost)?;

        let monthly_net = PlannerDecimal::new(inputs.monthly_income)
            .with_source(self.label.clone())
            .safe_sub(inputs.monthly_expenses)?;

        // Cushion is defined as 0 when expenses are 0; safe_div encodes
        // that, so no division-by-zero path exists here.
        let cushion_months = PlannerDecimal::new(*projected_cash)
            .with_source(self.label.clone())
            .safe_div(inputs.monthly_expenses)?;

        let zone = classify_zone(*cushion_months);
        let meter_progress = clamp_meter_progress(*cushion_months);

        let mut trace = vec![
            CalculationStep::initial("Cash on Hand", inputs.cash_balance),
            CalculationStep::subtract("Purchase Cost", inputs.purchase_cost),
            CalculationStep::result("Projected Cash", *projected_cash),
            CalculationStep::initial("Monthly Income", inputs.monthly_income),
            CalculationStep::subtract("Monthly Expenses", inputs.monthly_expenses),
            CalculationStep::result("Monthly Net", *monthly_net),
        ];

        if inputs.monthly_expenses.is_zero() {
            trace.push(CalculationStep::info(
                "Monthly expenses are zero - cushion defined as 0",
            ));
        } else {
            trace.push(CalculationStep::divide(
                "Monthly Expenses",
                inputs.monthly_expenses,
            ));
        }
        trace.push(CalculationStep::result("Cushion Months", *cushion_months));
        trace.push(CalculationStep::compare(
            "Healthy Floor (months)",
            ZoneKey::Healthy.profile().floor,
        ));
        trace.push(CalculationStep::info(format!(
            "Zone: {}",
            zone.profile().label
        )));

        let cushion = *cushion_months;
        tracing::debug!(
            zone = %zone,
            cushion = %cushion,
            meter = meter_progress,
            "Affordability assessed"
        );

        Ok(AffordabilityReport {
            inputs,
            projected_cash: *projected_cash,
            monthly_net: *monthly_net,
            cushion_months: cushion,
            zone,
            meter_progress,
            label: self.label.clone(),
            calculation_trace: trace,
        })
    }

    fn get_label(&self) -> Option<String> {
        self.label.clone()
    }

    fn get_id(&self) -> uuid::Uuid {
        self.id
    }
}
