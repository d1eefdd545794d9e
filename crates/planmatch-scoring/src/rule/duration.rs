// Session-duration fit.

use planmatch_core::{PlanSummary, WeightKey};

use super::{MatchRule, RuleContext, RuleOutcome};

// Checks the plan's average session length against the chosen bucket.
//
// Inside the bucket's inclusive range: reward with reason. Outside but
// strictly closer than `duration_tolerance` to the bucket code: small reward.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationRule;

impl MatchRule for DurationRule {
    fn name(&self) -> &str {
        "SessionDuration"
    }

    fn evaluate(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> RuleOutcome {
        let plan_duration = plan
            .avg_session_minutes
            .unwrap_or(ctx.settings.default_session_minutes);
        let choice = ctx.answers.duration;

        if choice.minute_range().contains(plan_duration) {
            RuleOutcome::with_reason(
                ctx.weight(WeightKey::DurationFit),
                format!("Fits your {} min timeframe", plan_duration),
            )
        } else if plan_duration.abs_diff(choice.code()) < ctx.settings.duration_tolerance {
            RuleOutcome::impact(ctx.weight(WeightKey::DurationNear))
        } else {
            RuleOutcome::none()
        }
    }
}
