use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

use crate::builder::{Build, Validate};
use crate::format::PlannerLocale;
use crate::inputs::IntoPlannerDecimal;
use crate::policy::InputPolicy;
use crate::types::PlannerError;

/// Global configuration for affordability assessments.
///
/// Holds the active input-normalization policy, the display locale and an
/// optional per-field ceiling. The ceiling is a presentation-layer concern
/// (slider ranges differ between deployments), so it is off by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub policy: InputPolicy,
    pub locale: PlannerLocale,
    /// Upper bound applied to every raw field when set. Under the lenient
    /// policy values clamp to it; under the strict policy they reject.
    pub field_ceiling: Option<Decimal>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            policy: InputPolicy::default(),
            locale: PlannerLocale::default(),
            field_ceiling: None,
        }
    }
}

// Ensure the caller can easily create a config from stored JSON.
impl std::str::FromStr for PlannerConfig {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: PlannerConfig = serde_json::from_str(s).map_err(|e| {
            PlannerError::ConfigurationError(format!("Failed to parse config JSON: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl PlannerConfig {
    pub fn builder() -> PlannerConfigBuilder {
        PlannerConfigBuilder::default()
    }

    /// Validates the configuration for logical consistency.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if let Some(ceiling) = self.field_ceiling {
            if ceiling <= Decimal::ZERO {
                return Err(PlannerError::ConfigurationError(
                    "Field ceiling must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Attempts to load configuration from environment variables.
    ///
    /// `CUSHION_POLICY` and `CUSHION_LOCALE` fall back to their defaults
    /// when unset; `CUSHION_FIELD_CEILING` is optional.
    pub fn from_env() -> Result<Self, PlannerError> {
        let policy = match env::var("CUSHION_POLICY") {
            Ok(s) => s
                .parse::<InputPolicy>()
                .map_err(PlannerError::ConfigurationError)?,
            Err(_) => InputPolicy::default(),
        };

        let locale = match env::var("CUSHION_LOCALE") {
            Ok(s) => s
                .parse::<PlannerLocale>()
                .map_err(PlannerError::ConfigurationError)?,
            Err(_) => PlannerLocale::default(),
        };

        let field_ceiling = match env::var("CUSHION_FIELD_CEILING") {
            Ok(s) => Some(s.parse::<Decimal>().map_err(|e| {
                PlannerError::ConfigurationError(format!("Invalid field ceiling: {}", e))
            })?),
            Err(_) => None,
        };

        let config = PlannerConfig {
            policy,
            locale,
            field_ceiling,
        };
        config.validate()?;
        Ok(config)
    }

    /// Attempts to load configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, PlannerError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PlannerError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;
        content.parse()
    }

    // ========== Fluent Helper Methods ==========

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_locale(mut self, locale: PlannerLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_field_ceiling(
        mut self,
        ceiling: impl IntoPlannerDecimal,
    ) -> Result<Self, PlannerError> {
        self.field_ceiling = Some(ceiling.into_planner_decimal()?);
        self.validate()?;
        Ok(self)
    }
}

// ========== PlannerConfigBuilder ==========

#[derive(Default)]
pub struct PlannerConfigBuilder {
    policy: Option<InputPolicy>,
    locale: Option<PlannerLocale>,
    field_ceiling: Option<Decimal>,
}

impl PlannerConfigBuilder {
    pub fn policy(mut self, policy: InputPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn locale(mut self, locale: PlannerLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn field_ceiling(mut self, ceiling: impl IntoPlannerDecimal) -> Self {
        if let Ok(c) = ceiling.into_planner_decimal() {
            self.field_ceiling = Some(c);
        }
        self
    }
}

impl Validate for PlannerConfigBuilder {
    fn validate(&self) -> Result<(), PlannerError> {
        if let Some(ceiling) = self.field_ceiling {
            if ceiling <= Decimal::ZERO {
                return Err(PlannerError::ConfigurationError(
                    "Field ceiling must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Build<PlannerConfig> for PlannerConfigBuilder {
    fn build(self) -> Result<PlannerConfig, PlannerError> {
        self.validate()?;

        let config = PlannerConfig {
            policy: self.policy.unwrap_or_default(),
            locale: self.locale.unwrap_or_default(),
            field_ceiling: self.field_ceiling,
        };

        config.validate()?;
        Ok(config)
    }
}

/// Connection settings for the marketing-webhook relay.
#[cfg(feature = "webhook")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Destination URL for captured leads.
    pub webhook_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

#[cfg(feature = "webhook")]
impl RelayConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            timeout_seconds: 10,
        }
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }
}
