use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu::decimal::{FixedDecimalFormatter, options::FixedDecimalFormatterOptions};
use icu::locid::Locale;
use writeable::Writeable;

/// Cushion value at which the meter reads 100%. Deliberately above the
/// Healthy cutoff (2 months) so the meter keeps visual headroom past the
/// classification boundary.
pub const METER_CEILING_MONTHS: Decimal = dec!(3);

/// Supported display locales for the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum PlannerLocale {
    #[default]
    EnUS,
    EnGB,
    DeDE,
}

impl PlannerLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlannerLocale::EnUS => "en-US",
            PlannerLocale::EnGB => "en-GB",
            PlannerLocale::DeDE => "de-DE",
        }
    }

    pub fn to_icu_locale(&self) -> Locale {
        self.as_str().parse().expect("Valid BCP-47 locale")
    }

    pub fn currency_code(&self) -> &'static str {
        match self {
            PlannerLocale::EnUS => "USD",
            PlannerLocale::EnGB => "GBP",
            PlannerLocale::DeDE => "EUR",
        }
    }
}

impl FromStr for PlannerLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" | "en" => Ok(PlannerLocale::EnUS),
            "en-GB" => Ok(PlannerLocale::EnGB),
            "de-DE" | "de" => Ok(PlannerLocale::DeDE),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Trait for formatting usage.
pub trait CurrencyFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
}

impl CurrencyFormatter for PlannerLocale {
    /// Whole-unit currency rendering: rounds to the nearest unit
    /// (midpoint away from zero), groups digits per locale, no minor
    /// units. `1234.6` formats as `$1,235` under `EnUS`.
    fn format_currency(&self, amount: Decimal) -> String {
        let locale = self.to_icu_locale();

        // ICU4X FixedDecimalFormatter with compiled data handles the
        // locale-specific grouping separators.
        let options = FixedDecimalFormatterOptions::default();
        let formatter = FixedDecimalFormatter::try_new(&locale.into(), options)
            .expect("Failed to create ICU formatter with compiled data");

        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let fixed_decimal =
            FixedDecimal::from_str(&rounded.to_string()).unwrap_or_else(|_| FixedDecimal::from(0));

        let formatted_number = formatter.format(&fixed_decimal);
        let number_str = formatted_number.write_to_string().into_owned();

        // Manual currency symbols until icu exposes a stable CurrencyFormatter.
        match self {
            PlannerLocale::EnUS => format!("${}", number_str),
            PlannerLocale::EnGB => format!("£{}", number_str),
            PlannerLocale::DeDE => format!("{} €", number_str),
        }
    }
}

/// Formats a cushion figure for the result card.
///
/// Negative cushions render as "0" rather than a confusing negative month
/// count. Below ten months one decimal place is shown; from ten months up
/// the value is rounded to whole months. The boundary applies to the input
/// value, so `9.95` takes the one-decimal path and renders "10.0" while
/// `10.04` renders "10".
pub fn format_cushion_months(value: Decimal) -> String {
    if value < Decimal::ZERO {
        return "0".to_string();
    }
    if value >= dec!(10) {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{}", rounded)
    } else {
        let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.1}", rounded)
    }
}

/// Maps a cushion figure onto the 0..=100 meter scale.
///
/// The input is bounded to `[0, METER_CEILING_MONTHS]`, scaled linearly and
/// rounded: three or more months of cushion fills the meter completely,
/// negative cushions read empty.
pub fn clamp_meter_progress(cushion_months: Decimal) -> u8 {
    let bounded = cushion_months.clamp(Decimal::ZERO, METER_CEILING_MONTHS);
    let percent = bounded / METER_CEILING_MONTHS * dec!(100);
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
}
