//! Rule-set API.
//!
//! This module provides:
//! - `RuleSet` trait for tuple-based rule evaluation
//! - Analysis types for score explanation
//! - Runtime weight override configuration

pub mod analysis;
pub mod rule_set;
pub mod weight_overrides;

#[cfg(test)]
mod tests;

pub use analysis::{PlanExplanation, RuleBreakdown, RuleMatch};
pub use rule_set::RuleSet;
pub use weight_overrides::{WeightOverrides, WeightProvider};
