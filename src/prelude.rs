//! Prelude module for the cushion engine.
//!
//! This module re-exports commonly used structs, traits, and types to allow
//! for easier usage of the library.
//!
//! # Usage
//!
//! ```rust
//! use cushion::prelude::*;
//! ```

// Core exports
pub use crate::builder::Build;
pub use crate::config::PlannerConfig;
pub use crate::planner::{AffordabilityPlanner, AssessAffordability, PlannerInputs};
pub use crate::policy::InputPolicy;
pub use crate::types::{AffordabilityReport, CalculationStep, PlannerError};
pub use crate::zone::{ZoneKey, ZoneProfile, classify_zone};

// Formatting and copy
pub use crate::format::{
    CurrencyFormatter, PlannerLocale, clamp_meter_progress, format_cushion_months,
};
pub use crate::tips::{select_tip, tip_pool};

// Input boundary
pub use crate::inputs::{IntoPlannerDecimal, RawInputs};

// Contact capture
pub use crate::lead::{CapturedLead, is_valid_email};

#[cfg(feature = "async")]
pub use crate::planner::AsyncAssessAffordability;

#[cfg(feature = "webhook")]
pub use crate::config::RelayConfig;
#[cfg(feature = "webhook")]
pub use crate::relay::{HttpLeadRelay, LeadRelay, RecordingRelay};
