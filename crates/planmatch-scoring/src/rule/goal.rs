// Goal/focus-tag match.

use planmatch_core::{PlanSummary, WeightKey};

use super::{MatchRule, RuleContext, RuleOutcome};

// Rewards plans tagged with at least one focus that serves the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalRule;

impl MatchRule for GoalRule {
    fn name(&self) -> &str {
        "GoalFocus"
    }

    fn evaluate(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> RuleOutcome {
        let goal = &ctx.answers.goal;
        if !goal.is_served_by(&plan.focus_tags) {
            return RuleOutcome::none();
        }

        RuleOutcome::with_reason(
            ctx.weight(WeightKey::GoalMatch),
            format!("Aligned with your goal to {}", goal.label().to_lowercase()),
        )
    }
}
