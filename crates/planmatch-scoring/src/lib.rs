//! Weighted rule scoring for PlanMatch.
//!
//! This crate turns questionnaire answers and a plan catalog into a ranking:
//! - Match rules (`ExperienceRule`, `FrequencyRule`, `GoalRule`, `DurationRule`)
//! - Tuple-based rule sets (zero virtual dispatch over rules)
//! - Runtime weight overrides
//! - Score explanation with per-rule breakdowns
//! - `PlanMatcher`, which scores, caps reasons, and stable-sorts
//!
//! # Architecture
//!
//! Rules are stored as generic type parameters, not `Box<dyn Rule>`. Scoring
//! is pure: the matcher holds no per-call state and never mutates plans.

// Core modules
pub mod api;
pub mod matcher;
pub mod rule;

// ============================================================================
// Rules
// ============================================================================

pub use rule::{
    DurationRule, ExperienceRule, FrequencyRule, GoalRule, MatchRule, RuleContext, RuleOutcome,
    RULE_GROUP,
};

// ============================================================================
// Rule Set (Tuple-Based)
// ============================================================================

pub use api::rule_set::RuleSet;
pub use api::weight_overrides::{WeightOverrides, WeightProvider};

// ============================================================================
// Analysis (for score explanation)
// ============================================================================

pub use api::analysis::{PlanExplanation, RuleBreakdown, RuleMatch};

// ============================================================================
// Matcher
// ============================================================================

pub use matcher::{DefaultRules, MatcherSettings, PlanMatcher, Ranking, ScoredPlan};
