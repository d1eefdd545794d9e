// Experience/difficulty match.

use planmatch_core::{Difficulty, Experience, MatchScore, PlanSummary, WeightKey};

use super::{MatchRule, RuleContext, RuleOutcome};

// Rewards plans whose difficulty suits the stated experience.
//
// Beginners get an extra bonus for an exact Beginner plan and a penalty for
// anything else. Other levels only miss the reward on a mismatch. Never
// produces a reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExperienceRule;

impl MatchRule for ExperienceRule {
    fn name(&self) -> &str {
        "ExperienceMatch"
    }

    fn evaluate(&self, plan: &PlanSummary, ctx: &RuleContext<'_>) -> RuleOutcome {
        let experience = &ctx.answers.experience;
        let is_beginner = *experience == Experience::Beginner;
        let beginner_plan = plan.difficulty == Some(Difficulty::Beginner);

        let mut impact = MatchScore::ZERO;
        if experience.accepts(plan.difficulty) {
            impact += ctx.weight(WeightKey::ExperienceMatch);
            if is_beginner && beginner_plan {
                impact += ctx.weight(WeightKey::BeginnerExactBonus);
            }
        } else if is_beginner && !beginner_plan {
            impact += ctx.weight(WeightKey::BeginnerMismatchPenalty);
        }

        RuleOutcome::impact(impact)
    }
}
