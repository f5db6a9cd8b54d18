use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::{CurrencyFormatter, PlannerLocale, format_cushion_months};
use crate::planner::PlannerInputs;
use crate::zone::{ZoneKey, ZoneProfile};

/// Errors produced by the affordability engine.
///
/// Formatting and classification are total functions and never fail; the
/// only library-level failures are input rejection (strict policy),
/// configuration problems, contact validation, and webhook delivery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// A raw numeric field was rejected before computation.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// The planner configuration is inconsistent or failed to load.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Decimal arithmetic overflowed.
    #[error("Arithmetic overflow in '{operation}'")]
    Overflow {
        operation: String,
        source_label: Option<String>,
    },

    /// The captured contact details failed validation (e.g. a malformed
    /// email address). Raised before any network call is attempted.
    #[error("Invalid contact: {0}")]
    InvalidContact(String),

    /// The webhook endpoint could not be reached or returned a non-2xx
    /// status. There is no retry; callers surface this as plain text.
    #[cfg(feature = "webhook")]
    #[error("Webhook delivery failed: {0}")]
    NetworkError(String),
}

/// Represents a single step in the affordability calculation.
///
/// The trace provides transparency into how the cushion figure and zone
/// were derived, so a result card can show its working.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationStep {
    /// Human-readable description of what this step does.
    pub description: String,
    /// The value at this step (if applicable).
    pub amount: Option<Decimal>,
    /// The operation type: "Initial", "Subtract", "Divide", "Compare",
    /// "Result" or "Info".
    pub operation: String,
}

impl CalculationStep {
    pub fn initial(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Initial".to_string(),
        }
    }

    pub fn subtract(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Subtract".to_string(),
        }
    }

    pub fn divide(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Divide".to_string(),
        }
    }

    pub fn compare(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Compare".to_string(),
        }
    }

    pub fn result(description: impl Into<String>, amount: Decimal) -> Self {
        Self {
            description: description.into(),
            amount: Some(amount),
            operation: "Result".to_string(),
        }
    }

    pub fn info(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: None,
            operation: "Info".to_string(),
        }
    }
}

/// The full outcome of an affordability assessment.
///
/// Everything a result renderer needs: the derived statistics, the zone
/// classification, the meter percentage and the calculation trace. Display
/// strings are produced on demand via the formatting helpers so the report
/// itself stays locale-neutral.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AffordabilityReport {
    /// The normalized inputs this report was computed from.
    pub inputs: PlannerInputs,
    /// Cash remaining after the purchase. May be negative.
    pub projected_cash: Decimal,
    /// Monthly income minus monthly expenses. May be negative.
    pub monthly_net: Decimal,
    /// Months of expenses the post-purchase cash would cover.
    /// Zero when monthly expenses are zero.
    pub cushion_months: Decimal,
    /// Qualitative classification of the cushion.
    pub zone: ZoneKey,
    /// Display-only fill percentage for the cushion meter, 0..=100.
    pub meter_progress: u8,
    /// Optional label for identifying this assessment.
    pub label: Option<String>,
    /// Step-by-step trace of how this result was derived.
    pub calculation_trace: Vec<CalculationStep>,
}

impl AffordabilityReport {
    /// Static metadata (label, message, threshold) for the assigned zone.
    pub fn zone_profile(&self) -> &'static ZoneProfile {
        self.zone.profile()
    }

    /// Cushion months rendered with the asymmetric precision rule:
    /// one decimal below ten months, whole months at ten and above.
    pub fn cushion_display(&self) -> String {
        format_cushion_months(self.cushion_months)
    }

    /// Projected post-purchase cash as a whole-unit currency string.
    pub fn projected_cash_display(&self, locale: PlannerLocale) -> String {
        locale.format_currency(self.projected_cash)
    }

    /// Monthly net as a whole-unit currency string.
    pub fn monthly_net_display(&self, locale: PlannerLocale) -> String {
        locale.format_currency(self.monthly_net)
    }

    /// Returns a concise status string.
    /// Format: "{Label}: {Zone} - {cushion} months of cushion"
    pub fn summary(&self) -> String {
        let label_str = self.label.as_deref().unwrap_or("Plan");
        format!(
            "{}: {} - {} months of cushion",
            label_str,
            self.zone_profile().label,
            self.cushion_display()
        )
    }

    /// Generates a human-readable explanation of the assessment.
    ///
    /// The output is formatted as a step-by-step list showing operations
    /// and their results, helping users verify how the cushion figure and
    /// zone were determined.
    pub fn explain(&self) -> String {
        use std::fmt::Write;
        let mut output = String::new();
        let label = self.label.as_deref().unwrap_or("Plan");

        writeln!(&mut output, "Explanation for '{}':", label).unwrap();
        writeln!(&mut output, "{:-<50}", "").unwrap();

        let max_desc_len = self
            .calculation_trace
            .iter()
            .map(|step| step.description.len())
            .max()
            .unwrap_or(20)
            .max(20);

        for step in &self.calculation_trace {
            let op_symbol = match step.operation.as_str() {
                "Initial" => " ",
                "Subtract" => "-",
                "Divide" => "/",
                "Result" => "=",
                "Compare" => "?",
                _ => " ",
            };

            if step.operation == "Info" {
                writeln!(&mut output, "  INFO: {}", step.description).unwrap();
            } else if let Some(amt) = step.amount {
                writeln!(
                    &mut output,
                    "  {:<width$} : {} {:>12} ({})",
                    step.description,
                    op_symbol,
                    format!("{:.2}", amt),
                    step.operation,
                    width = max_desc_len
                )
                .unwrap();
            } else {
                writeln!(
                    &mut output,
                    "  {:<width$} : [No Amount] ({})",
                    step.description,
                    step.operation,
                    width = max_desc_len
                )
                .unwrap();
            }
        }

        writeln!(&mut output, "{:-<50}", "").unwrap();
        writeln!(&mut output, "Zone: {}", self.zone_profile().label).unwrap();
        writeln!(&mut output, "Cushion: {} months", self.cushion_display()).unwrap();
        writeln!(&mut output, "Meter: {}%", self.meter_progress).unwrap();

        output
    }
}

impl std::fmt::Display for AffordabilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label_str = self.label.as_deref().unwrap_or("Plan");
        writeln!(f, "Plan: {}", label_str)?;
        writeln!(
            f,
            "Projected Cash: {} | Monthly Net: {}",
            self.projected_cash, self.monthly_net
        )?;
        write!(
            f,
            "Zone: {} ({} months, meter {}%)",
            self.zone_profile().label,
            self.cushion_display(),
            self.meter_progress
        )
    }
}
