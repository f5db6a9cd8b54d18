pub mod builder;
pub mod config;
pub mod format;
pub mod inputs;
pub mod lead;
pub mod math;
pub mod planner;
pub mod policy;
pub mod prelude;
pub mod tips;
pub mod types;
pub mod zone;

#[cfg(feature = "webhook")]
pub mod relay;

pub use config::PlannerConfig;
pub use format::{CurrencyFormatter, PlannerLocale};
pub use planner::{AffordabilityPlanner, AssessAffordability, PlannerInputs};
pub use policy::InputPolicy;
pub use types::{AffordabilityReport, PlannerError};
pub use zone::{ZoneKey, classify_zone};
