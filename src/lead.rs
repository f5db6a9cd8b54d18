//! Captured-contact payloads for the marketing relay.
//!
//! Validation happens here, before any network call: a lead without a
//! plausible `local@domain.tld` email never reaches the relay.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::planner::PlannerInputs;
use crate::types::{AffordabilityReport, PlannerError};
use crate::zone::ZoneKey;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("Valid email pattern"));

/// Returns whether the string looks like a deliverable email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A captured lead: the visitor's contact details plus the assessment that
/// produced the result card they saw. Serialized as the webhook JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedLead {
    pub id: uuid::Uuid,
    pub email: String,
    pub first_name: Option<String>,
    /// Stable zone key ("healthy" / "tight" / "risky").
    pub zone: ZoneKey,
    pub cushion_months: Decimal,
    pub inputs: PlannerInputs,
    pub captured_at: DateTime<Utc>,
}

impl CapturedLead {
    /// Builds a lead from a finished assessment, validating the email
    /// before anything else happens.
    pub fn new(
        email: impl Into<String>,
        first_name: Option<String>,
        report: &AffordabilityReport,
    ) -> Result<Self, PlannerError> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(PlannerError::InvalidContact(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4(),
            email,
            first_name,
            zone: report.zone,
            cushion_months: report.cushion_months,
            inputs: report.inputs,
            captured_at: Utc::now(),
        })
    }
}
