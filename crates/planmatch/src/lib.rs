//! PlanMatch - Rank Training Plans Against Questionnaire Answers
//!
//! Zero-wiring API: hand over the catalog and the answers, get a ranking.
//!
//! # Example
//!
//! ```rust
//! use planmatch::prelude::*;
//!
//! let plans = vec![
//!     PlanSummary::new("starter")
//!         .with_difficulty(Difficulty::Beginner)
//!         .with_sessions_per_week(3)
//!         .with_focus_tags([FocusTag::MuscleBuilding])
//!         .with_avg_session_minutes(35),
//! ];
//! let answers = Answers::new("Build muscle", "Beginner", 3, 30);
//!
//! let ranked = planmatch::score(&plans, &answers);
//! assert_eq!(ranked[0].score, MatchScore::of(100));
//! ```

// Domain types
pub use planmatch_core::{
    Answers, Difficulty, DurationChoice, Experience, FocusTag, Goal, MinuteRange, PlanSummary,
};

// Score and rule identity
pub use planmatch_core::{ImpactType, MatchScore, RuleRef, WeightKey};

// Errors
pub use planmatch_core::{PlanMatchError, Result};
pub use planmatch_config::ConfigError;

// Configuration
pub use planmatch_config::MatcherConfig;

// Matching
pub use planmatch_scoring::{
    DefaultRules, MatcherSettings, PlanMatcher, Ranking, ScoredPlan, WeightOverrides,
    WeightProvider,
};

// Stock rules and extension points for custom ones
pub use planmatch_scoring::{DurationRule, ExperienceRule, FrequencyRule, GoalRule};
pub use planmatch_scoring::{MatchRule, RuleContext, RuleOutcome, RuleSet};

// Explanation
pub use planmatch_scoring::{PlanExplanation, RuleBreakdown, RuleMatch};

/// Scores and sorts `plans` with the stock rules and weights.
///
/// Same as `PlanMatcher::new().score(plans, answers)`.
pub fn score<'p>(plans: &'p [PlanSummary], answers: &Answers) -> Vec<ScoredPlan<'p>> {
    PlanMatcher::new().score(plans, answers)
}

/// Like [`score`], wrapped for top/runner-up access.
pub fn rank<'p>(plans: &'p [PlanSummary], answers: &Answers) -> Ranking<'p> {
    PlanMatcher::new().rank(plans, answers)
}

pub mod prelude {
    pub use super::{score, rank};
    pub use super::{Answers, Difficulty, DurationChoice, Experience, FocusTag, Goal, PlanSummary};
    pub use super::{MatchScore, WeightKey};
    pub use super::{MatcherConfig, PlanMatcher, Ranking, ScoredPlan};
    pub use super::{MatchRule, RuleContext, RuleOutcome, RuleSet};
}
