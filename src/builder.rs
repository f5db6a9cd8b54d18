use crate::types::PlannerError;

/// Trait for builders that produce a planner object or configuration.
///
/// This creates a unified interface for object creation across the crate.
pub trait Build<T> {
    /// Builds the final object, returning a Result.
    fn build(self) -> Result<T, PlannerError>;
}

/// Trait for pre-build validation of builder state.
pub trait Validate {
    fn validate(&self) -> Result<(), PlannerError>;
}
