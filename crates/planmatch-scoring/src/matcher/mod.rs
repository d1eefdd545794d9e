//! Plan matcher: scores a catalog against one set of answers and ranks it.
//!
//! Logging levels:
//! - **INFO**: Scoring start/end with plan count and best score
//! - **DEBUG**: Per-plan totals, unrecognized answers
//! - **TRACE**: Per-rule impacts

mod ranking;

#[cfg(test)]
mod tests;

pub use ranking::{Ranking, ScoredPlan};

use planmatch_config::MatcherConfig;
use planmatch_core::{Answers, PlanSummary};
use tracing::{debug, info, trace};

use crate::api::analysis::PlanExplanation;
use crate::api::rule_set::RuleSet;
use crate::api::weight_overrides::WeightOverrides;
use crate::rule::{DurationRule, ExperienceRule, FrequencyRule, GoalRule, RuleContext};

/// The stock rules, in evaluation order.
pub type DefaultRules = (ExperienceRule, FrequencyRule, GoalRule, DurationRule);

/// Non-weight knobs of the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherSettings {
    /// Maximum match reasons kept per plan.
    pub max_reasons: usize,
    /// Sessions per week assumed for plans that don't state it.
    pub default_sessions_per_week: u32,
    /// Session minutes assumed for plans that don't state it.
    pub default_session_minutes: u32,
    /// Exclusive distance from the bucket code for the near-fit bonus.
    pub duration_tolerance: u32,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            max_reasons: 2,
            default_sessions_per_week: 3,
            default_session_minutes: 45,
            duration_tolerance: 15,
        }
    }
}

impl From<&MatcherConfig> for MatcherSettings {
    fn from(config: &MatcherConfig) -> Self {
        Self {
            max_reasons: config.max_reasons,
            default_sessions_per_week: config.default_sessions_per_week,
            default_session_minutes: config.default_session_minutes,
            duration_tolerance: config.duration_tolerance,
        }
    }
}

/// Ranks training plans against questionnaire answers.
///
/// Scoring is total: every plan gets a score, unknown answers and missing
/// plan fields fall back to defaults, and nothing is filtered out.
///
/// # Examples
///
/// ```
/// use planmatch_core::{Answers, Difficulty, FocusTag, PlanSummary};
/// use planmatch_scoring::PlanMatcher;
///
/// let plans = vec![
///     PlanSummary::new("advanced")
///         .with_difficulty(Difficulty::Advanced)
///         .with_sessions_per_week(5),
///     PlanSummary::new("starter")
///         .with_difficulty(Difficulty::Beginner)
///         .with_sessions_per_week(3)
///         .with_focus_tags([FocusTag::MuscleBuilding])
///         .with_avg_session_minutes(35),
/// ];
/// let answers = Answers::new("Build muscle", "Beginner", 3, 30);
///
/// let ranked = PlanMatcher::new().score(&plans, &answers);
///
/// assert_eq!(ranked[0].plan.id, "starter");
/// assert_eq!(ranked[0].score.value(), 100);
/// assert_eq!(
///     ranked[0].match_reasons,
///     ["Matches your 3 days/week preference", "Aligned with your goal to build muscle"]
/// );
/// assert_eq!(ranked[1].score.value(), -55);
/// ```
#[derive(Debug, Clone)]
pub struct PlanMatcher<R = DefaultRules> {
    rules: R,
    settings: MatcherSettings,
    weights: WeightOverrides,
}

impl PlanMatcher<DefaultRules> {
    /// Creates a matcher with the stock rules, settings, and weights.
    pub fn new() -> Self {
        Self::with_rules(DefaultRules::default())
    }

    /// Creates a stock-rule matcher tuned by a configuration.
    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new()
            .with_settings(MatcherSettings::from(config))
            .with_weights(WeightOverrides::from_config(config))
    }
}

impl Default for PlanMatcher<DefaultRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RuleSet> PlanMatcher<R> {
    /// Creates a matcher over a custom rule tuple.
    pub fn with_rules(rules: R) -> Self {
        Self {
            rules,
            settings: MatcherSettings::default(),
            weights: WeightOverrides::new(),
        }
    }

    pub fn with_settings(mut self, settings: MatcherSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_weights(mut self, weights: WeightOverrides) -> Self {
        self.weights = weights;
        self
    }

    pub fn settings(&self) -> &MatcherSettings {
        &self.settings
    }

    pub fn weights(&self) -> &WeightOverrides {
        &self.weights
    }

    pub fn rule_count(&self) -> usize {
        self.rules.rule_count()
    }

    /// Scores every plan and sorts by descending score.
    ///
    /// Ties keep their catalog order. The output has one entry per input
    /// plan, each with at most `max_reasons` reasons.
    pub fn score<'p>(&self, plans: &'p [PlanSummary], answers: &Answers) -> Vec<ScoredPlan<'p>> {
        info!(
            event = "score_start",
            plan_count = plans.len(),
            goal = %answers.goal,
            experience = %answers.experience,
            days_per_week = answers.days_per_week,
            duration = answers.duration.code(),
        );
        log_unrecognized(answers);

        let mut scored: Vec<ScoredPlan<'p>> = plans
            .iter()
            .map(|plan| self.score_plan(plan, answers))
            .collect();

        // Vec::sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        info!(
            event = "score_end",
            plan_count = scored.len(),
            best_score = ?scored.first().map(|s| s.score.value()),
        );
        scored
    }

    /// Like [`score`](Self::score), wrapped for top/runner-up access.
    pub fn rank<'p>(&self, plans: &'p [PlanSummary], answers: &Answers) -> Ranking<'p> {
        Ranking::new(self.score(plans, answers))
    }

    /// Scores a single plan, capping its reasons.
    pub fn score_plan<'p>(&self, plan: &'p PlanSummary, answers: &Answers) -> ScoredPlan<'p> {
        let scored = self
            .explain(plan, answers)
            .into_scored(self.settings.max_reasons);
        debug!(
            event = "plan_scored",
            plan_id = %plan.id,
            score = %scored.score,
            reasons = scored.match_reasons.len(),
        );
        scored
    }

    /// Explains one plan's score rule by rule, without capping reasons.
    pub fn explain<'p>(&self, plan: &'p PlanSummary, answers: &Answers) -> PlanExplanation<'p> {
        let ctx = RuleContext::new(answers, &self.settings, &self.weights);
        let matches = self.rules.evaluate_each(plan, &ctx);
        for m in &matches {
            trace!(
                event = "rule_evaluated",
                plan_id = %plan.id,
                rule = %m.rule_ref.full_name(),
                impact = %m.score,
            );
        }
        PlanExplanation::new(plan, matches)
    }

    /// Explains every plan, in the same order [`score`](Self::score) ranks them.
    pub fn explain_all<'p>(
        &self,
        plans: &'p [PlanSummary],
        answers: &Answers,
    ) -> Vec<PlanExplanation<'p>> {
        log_unrecognized(answers);
        let mut explanations: Vec<PlanExplanation<'p>> = plans
            .iter()
            .map(|plan| self.explain(plan, answers))
            .collect();
        explanations.sort_by(|a, b| b.score.cmp(&a.score));
        explanations
    }
}

// Unknown answers are legal input; they only forfeit bonuses.
fn log_unrecognized(answers: &Answers) {
    if !answers.goal.is_recognized() {
        debug!(event = "unrecognized_answer", field = "goal", value = %answers.goal);
    }
    if !answers.experience.is_recognized() {
        debug!(event = "unrecognized_answer", field = "experience", value = %answers.experience);
    }
    if !answers.duration.is_recognized() {
        debug!(event = "unrecognized_answer", field = "duration", value = answers.duration.code());
    }
}
