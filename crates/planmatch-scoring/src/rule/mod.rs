//! Match rules.
//!
//! A rule looks at one plan and the answers, and returns a signed score
//! impact plus an optional reason shown to the user. Rules are independent:
//! none reads another's outcome, so their order only matters for which
//! reasons survive the reason cap.

mod duration;
mod experience;
mod frequency;
mod goal;


pub use duration::DurationRule;
pub use experience::ExperienceRule;
pub use frequency::FrequencyRule;
pub use goal::GoalRule;

use planmatch_core::{Answers, MatchScore, PlanSummary, RuleRef, WeightKey};

use crate::api::weight_overrides::WeightProvider;
use crate::matcher::MatcherSettings;

/// Group name used in the [`RuleRef`] of the stock rules.
pub const RULE_GROUP: &str = "planmatch";

/// Everything a rule may read besides the plan itself.
pub struct RuleContext<'a> {
    pub answers: &'a Answers,
    pub settings: &'a MatcherSettings,
    pub weights: &'a dyn WeightProvider,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        answers: &'a Answers,
        settings: &'a MatcherSettings,
        weights: &'a dyn WeightProvider,
    ) -> Self {
        Self {
            answers,
            settings,
            weights,
        }
    }

    /// Effective weight: override if present, stock value otherwise.
    #[inline]
    pub fn weight(&self, key: WeightKey) -> MatchScore {
        self.weights.weight_or_default(key)
    }
}

/// What a single rule contributed to a plan's score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub impact: MatchScore,
    pub reason: Option<String>,
}

impl RuleOutcome {
    /// No change, no reason.
    pub fn none() -> Self {
        Self::default()
    }

    /// A score change without a reason.
    pub fn impact(impact: MatchScore) -> Self {
        Self {
            impact,
            reason: None,
        }
    }

    /// A score change with a user-facing reason.
    pub fn with_reason(impact: MatchScore, reason: impl Into<String>) -> Self {
        Self {
            impact,
            reason: Some(reason.into()),
        }
    }
}

/// A single scoring rule.
///
/// Implementations must be pure: the same plan and context always produce
/// the same outcome.
pub trait MatchRule: Send + Sync {
    /// Returns the rule name.
    fn name(&self) -> &str;

    /// Returns the rule reference (group + name).
    ///
    /// Default implementation places the rule in `RULE_GROUP`.
    fn rule_ref(&self) -> RuleRef {
        RuleRef::new(RULE_GROUP, self.name())
    }

    /// Scores one plan.
    fn evaluate(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> RuleOutcome;
}
