use serde::{Deserialize, Serialize};

/// Input-normalization policy for raw planner fields.
///
/// Source UIs disagree on how to treat out-of-range or non-finite input:
/// some silently clamp, some surface a validation error. Both behaviors are
/// supported; `Lenient` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputPolicy {
    /// Substitute 0 for non-finite values, floor negatives at 0 and clamp
    /// to the configured ceiling. Never rejects.
    #[default]
    Lenient,
    /// Reject non-finite, negative or over-ceiling values before any
    /// computation takes place.
    Strict,
}

impl InputPolicy {
    pub fn strategy(&self) -> Box<dyn PolicyStrategy> {
        match self {
            InputPolicy::Lenient => Box::new(LenientStrategy),
            InputPolicy::Strict => Box::new(StrictStrategy),
        }
    }
}

impl std::str::FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lenient" => Ok(InputPolicy::Lenient),
            "strict" => Ok(InputPolicy::Strict),
            _ => Err(format!("Unsupported input policy: {}", s)),
        }
    }
}

/// Concrete normalization behavior derived from a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationRules {
    /// Reject non-finite raw values instead of substituting 0.
    pub reject_non_finite: bool,
    /// Reject negative values instead of flooring at 0.
    pub reject_negative: bool,
    /// Reject values above the configured ceiling instead of clamping.
    pub reject_above_ceiling: bool,
}

impl Default for NormalizationRules {
    fn default() -> Self {
        Self {
            reject_non_finite: false,
            reject_negative: false,
            reject_above_ceiling: false,
        }
    }
}

pub trait PolicyStrategy {
    fn rules(&self) -> NormalizationRules;
}

pub struct LenientStrategy;
impl PolicyStrategy for LenientStrategy {
    fn rules(&self) -> NormalizationRules {
        NormalizationRules::default()
    }
}

pub struct StrictStrategy;
impl PolicyStrategy for StrictStrategy {
    fn rules(&self) -> NormalizationRules {
        NormalizationRules {
            reject_non_finite: true,
            reject_negative: true,
            reject_above_ceiling: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_lenient() {
        assert_eq!(InputPolicy::default(), InputPolicy::Lenient);
    }

    #[test]
    fn test_strict_rules_reject_everything_invalid() {
        let rules = InputPolicy::Strict.strategy().rules();
        assert!(rules.reject_non_finite);
        assert!(rules.reject_negative);
        assert!(rules.reject_above_ceiling);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<InputPolicy>().unwrap(), InputPolicy::Strict);
        assert_eq!("Lenient".parse::<InputPolicy>().unwrap(), InputPolicy::Lenient);
        assert!("clamp".parse::<InputPolicy>().is_err());
    }
}
