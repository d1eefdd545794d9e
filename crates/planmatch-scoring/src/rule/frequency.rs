// Weekly frequency match.

use planmatch_core::{PlanSummary, WeightKey};

use super::{MatchRule, RuleContext, RuleOutcome};

// Compares the plan's sessions per week with the requested training days.
//
// Exact: reward with reason. One day off: smaller reward. Further: penalty.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRule;

impl MatchRule for FrequencyRule {
    fn name(&self) -> &str {
        "WeeklyFrequency"
    }

    fn evaluate(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> RuleOutcome {
        let plan_days = plan
            .sessions_per_week
            .unwrap_or(ctx.settings.default_sessions_per_week);

        match plan_days.abs_diff(ctx.answers.days_per_week) {
            0 => RuleOutcome::with_reason(
                ctx.weight(WeightKey::FrequencyExact),
                format!("Matches your {} days/week preference", plan_days),
            ),
            1 => RuleOutcome::impact(ctx.weight(WeightKey::FrequencyNear)),
            _ => RuleOutcome::impact(ctx.weight(WeightKey::FrequencyFar)),
        }
    }
}
