//! PlanMatch Core - Core types for training-plan ranking
//!
//! This crate provides the fundamental abstractions for PlanMatch:
//! - The closed questionnaire vocabulary (goals, experience levels, duration buckets)
//! - Plan catalog entries and their focus tags
//! - The integer match score
//! - Rule and weight identifiers shared by scoring and configuration

pub mod domain;
pub mod error;
pub mod rule;
pub mod score;
pub mod weight;

pub use domain::{
    Answers, Difficulty, DurationChoice, Experience, FocusTag, Goal, MinuteRange, PlanSummary,
};
pub use error::{PlanMatchError, Result};
pub use rule::{ImpactType, RuleRef};
pub use score::MatchScore;
pub use weight::WeightKey;
