use planmatch_core::{MatchScore, PlanSummary};
use planmatch_test::{beginner_muscle, ideal_beginner_plan};

use crate::api::rule_set::RuleSet;
use crate::api::weight_overrides::WeightOverrides;
use crate::matcher::{DefaultRules, MatcherSettings};
use crate::rule::{FrequencyRule, GoalRule, MatchRule, RuleContext, RuleOutcome};

// Rule that adds a fixed amount, for checking tuple plumbing.
struct Fixed(&'static str, i64);

impl MatchRule for Fixed {
    fn name(&self) -> &str {
        self.0
    }

    fn evaluate(&self, _plan: &PlanSummary, _ctx: &RuleContext<'_>) -> RuleOutcome {
        RuleOutcome::with_reason(MatchScore::of(self.1), self.0)
    }
}

fn eval_all<R: RuleSet>(rules: &R) -> (MatchScore, Vec<String>) {
    let settings = MatcherSettings::default();
    let weights = WeightOverrides::new();
    let answers = beginner_muscle();
    let ctx = RuleContext::new(&answers, &settings, &weights);
    let plan = ideal_beginner_plan();

    let matches = rules.evaluate_each(&plan, &ctx);
    let total = matches.iter().map(|m| m.score).sum();
    let names = matches.into_iter().map(|m| m.rule_ref.name).collect();
    (total, names)
}

#[test]
fn test_empty_set() {
    assert_eq!(().rule_count(), 0);
    assert_eq!(eval_all(&()), (MatchScore::ZERO, vec![]));
}

#[test]
fn test_single_rule_tuple() {
    let rules = (Fixed("only", 7),);
    assert_eq!(rules.rule_count(), 1);
    assert_eq!(eval_all(&rules), (MatchScore::of(7), vec!["only".to_string()]));
}

#[test]
fn test_evaluate_each_preserves_tuple_order() {
    let rules = (Fixed("c", 1), Fixed("a", 2), Fixed("b", -4));
    let (total, names) = eval_all(&rules);
    assert_eq!(total, MatchScore::of(-1));
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn test_eight_rules() {
    let rules = (
        Fixed("r0", 1),
        Fixed("r1", 1),
        Fixed("r2", 1),
        Fixed("r3", 1),
        Fixed("r4", 1),
        Fixed("r5", 1),
        Fixed("r6", 1),
        Fixed("r7", 1),
    );
    assert_eq!(rules.rule_count(), 8);
    assert_eq!(eval_all(&rules).0, MatchScore::of(8));
}

#[test]
fn test_default_rules_total() {
    let rules = DefaultRules::default();
    assert_eq!(rules.rule_count(), 4);

    let (total, names) = eval_all(&rules);
    assert_eq!(total, MatchScore::of(100));
    assert_eq!(
        names,
        ["ExperienceMatch", "WeeklyFrequency", "GoalFocus", "SessionDuration"]
    );
}

#[test]
fn test_evaluate_each_keeps_scores_and_reasons() {
    let rules = (GoalRule, FrequencyRule, Fixed("bonus", 3));
    let settings = MatcherSettings::default();
    let weights = WeightOverrides::new();
    let answers = beginner_muscle();
    let ctx = RuleContext::new(&answers, &settings, &weights);
    let plan = ideal_beginner_plan();

    let matches = rules.evaluate_each(&plan, &ctx);
    let scores: Vec<i64> = matches.iter().map(|m| m.score.value()).collect();
    assert_eq!(scores, [20, 25, 3]);
    assert_eq!(matches[2].reason.as_deref(), Some("bonus"));

    let total: MatchScore = matches.iter().map(|m| m.score).sum();
    assert_eq!(total, MatchScore::of(48));
}
