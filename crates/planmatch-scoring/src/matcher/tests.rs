//! Tests for ranking a catalog.

use planmatch_config::MatcherConfig;
use planmatch_core::{Answers, Difficulty, FocusTag, MatchScore, PlanSummary, WeightKey};
use planmatch_test::answers::{beginner_muscle, intermediate_fat_loss, misspelled};
use planmatch_test::catalog::{SAMPLE_RANKING, SAMPLE_SCORES};
use planmatch_test::plans::plan;
use planmatch_test::{advanced_five_day_plan, bare_plan, ideal_beginner_plan, sample_catalog};

use super::*;
use crate::api::weight_overrides::WeightOverrides;
use crate::rule::{GoalRule, MatchRule, RuleOutcome};

fn ids<'a>(ranked: &'a [ScoredPlan<'_>]) -> Vec<&'a str> {
    ranked.iter().map(|s| s.plan.id.as_str()).collect()
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_ideal_beginner_plan_scores_100() {
    let plans = [ideal_beginner_plan()];
    let ranked = PlanMatcher::new().score(&plans, &beginner_muscle());

    assert_eq!(ranked[0].score, MatchScore::of(100));
    assert_eq!(
        ranked[0].match_reasons,
        [
            "Matches your 3 days/week preference",
            "Aligned with your goal to build muscle",
        ]
    );
}

#[test]
fn test_advanced_plan_for_beginner_scores_minus_55() {
    let plans = [advanced_five_day_plan()];
    let ranked = PlanMatcher::new().score(&plans, &beginner_muscle());

    assert_eq!(ranked[0].score, MatchScore::of(-55));
    assert_eq!(ranked[0].match_reasons, ["Fits your 45 min timeframe"]);
}

#[test]
fn test_empty_catalog() {
    let matcher = PlanMatcher::new();
    for answers in [beginner_muscle(), intermediate_fat_loss(), misspelled()] {
        assert!(matcher.score(&[], &answers).is_empty());
    }
}

#[test]
fn test_plan_without_optional_fields() {
    let plans = [bare_plan()];
    let ranked = PlanMatcher::new().score(&plans, &beginner_muscle());

    // -50 (no difficulty) + 25 (3 days default) + 0 + 15 (45 min default)
    assert_eq!(ranked[0].score, MatchScore::of(-10));
    assert_eq!(
        ranked[0].match_reasons,
        ["Matches your 3 days/week preference", "Fits your 45 min timeframe"]
    );
}

// ============================================================================
// Ranking properties
// ============================================================================

#[test]
fn test_sample_catalog_ranking() {
    let catalog = sample_catalog();
    let ranked = PlanMatcher::new().score(&catalog, &beginner_muscle());

    assert_eq!(ids(&ranked), SAMPLE_RANKING);
    let scores: Vec<i64> = ranked.iter().map(|s| s.score.value()).collect();
    assert_eq!(scores, SAMPLE_SCORES);
}

#[test]
fn test_output_length_matches_input() {
    let catalog = sample_catalog();
    for answers in [beginner_muscle(), intermediate_fat_loss(), misspelled()] {
        assert_eq!(PlanMatcher::new().score(&catalog, &answers).len(), catalog.len());
    }
}

#[test]
fn test_sorted_descending_with_capped_reasons() {
    let catalog = sample_catalog();
    let answers = [
        beginner_muscle(),
        intermediate_fat_loss(),
        Answers::new("Improve fitness", "Experienced", 6, 70),
        Answers::new("Get stronger", "Intermediate", 1, 20),
    ];

    for answers in &answers {
        let ranked = PlanMatcher::new().score(&catalog, answers);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(ranked.iter().all(|s| s.match_reasons.len() <= 2));
    }
}

#[test]
fn test_ties_keep_catalog_order() {
    let twins: Vec<PlanSummary> = ["t-1", "t-2", "t-3", "t-4"]
        .into_iter()
        .map(|id| plan(id, Difficulty::Beginner, 3, 30, &[FocusTag::Mobility]))
        .collect();
    let mut catalog = vec![advanced_five_day_plan()];
    catalog.extend(twins);
    catalog.push(ideal_beginner_plan());

    let ranked = PlanMatcher::new().score(&catalog, &beginner_muscle());
    assert_eq!(
        ids(&ranked),
        [
            "ideal-beginner",
            "t-1",
            "t-2",
            "t-3",
            "t-4",
            "advanced-five-day"
        ]
    );
}

#[test]
fn test_idempotent_and_input_untouched() {
    let catalog = sample_catalog();
    let before = catalog.clone();
    let matcher = PlanMatcher::new();
    let answers = intermediate_fat_loss();

    let first = matcher.score(&catalog, &answers);
    let second = matcher.score(&catalog, &answers);
    assert_eq!(first, second);
    drop((first, second));
    assert_eq!(catalog, before);
}

#[test]
fn test_scored_plan_references_input() {
    let catalog = sample_catalog();
    let ranked = PlanMatcher::new().score(&catalog, &beginner_muscle());
    for scored in &ranked {
        assert!(catalog.iter().any(|p| std::ptr::eq(p, scored.plan)));
    }
}

#[test]
fn test_misspelled_answers_degrade_silently() {
    // Known sharp edge: typos lose the experience and goal terms, no error.
    let plans = [ideal_beginner_plan()];
    let ranked = PlanMatcher::new().score(&plans, &misspelled());

    assert_eq!(ranked[0].score, MatchScore::of(40));
    assert_eq!(
        ranked[0].match_reasons,
        [
            "Matches your 3 days/week preference",
            "Fits your 35 min timeframe"
        ]
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_from_config_applies_weights_and_settings() {
    let config = MatcherConfig::new()
        .with_max_reasons(3)
        .with_weight(WeightKey::GoalMatch, 50);
    let matcher = PlanMatcher::from_config(&config);
    let plans = [ideal_beginner_plan()];

    let ranked = matcher.score(&plans, &beginner_muscle());
    assert_eq!(ranked[0].score, MatchScore::of(130));
    assert_eq!(ranked[0].match_reasons.len(), 3);
    assert_eq!(matcher.settings().max_reasons, 3);
    assert_eq!(matcher.weights().len(), 1);
}

#[test]
fn test_default_config_reproduces_stock_ranking() {
    let catalog = sample_catalog();
    let stock = PlanMatcher::new().score(&catalog, &beginner_muscle());
    let configured =
        PlanMatcher::from_config(&MatcherConfig::default()).score(&catalog, &beginner_muscle());
    assert_eq!(stock, configured);
}

#[test]
fn test_field_defaults_come_from_settings() {
    let settings = MatcherSettings {
        default_sessions_per_week: 5,
        default_session_minutes: 60,
        ..MatcherSettings::default()
    };
    let matcher = PlanMatcher::new().with_settings(settings);
    let plans = [bare_plan()];

    // -50 + (5 vs 3: -20) + 0 + (60 vs 30 bucket: 0)
    let ranked = matcher.score(&plans, &beginner_muscle());
    assert_eq!(ranked[0].score, MatchScore::of(-70));
    assert!(ranked[0].match_reasons.is_empty());
}

#[test]
fn test_weight_override_can_flip_order() {
    let catalog = sample_catalog();
    let weights = WeightOverrides::from_pairs([(WeightKey::BeginnerMismatchPenalty, MatchScore::ZERO)]);
    let ranked = PlanMatcher::new()
        .with_weights(weights)
        .score(&catalog, &beginner_muscle());

    // push-pull-legs: 0 + 10 + 20 + 0 = 30; powerbuilding-elite: 0 - 20 + 20 + 0 = 0
    assert_eq!(ids(&ranked)[4], "push-pull-legs");
    assert_eq!(ranked[4].score, MatchScore::of(30));
    assert_eq!(ranked[5].score, MatchScore::ZERO);
}

#[test]
fn test_extreme_weights_saturate() {
    let weights = WeightOverrides::from_pairs([
        (WeightKey::ExperienceMatch, MatchScore::of(i64::MAX)),
        (WeightKey::BeginnerMismatchPenalty, MatchScore::of(i64::MIN)),
        (WeightKey::FrequencyFar, MatchScore::of(i64::MIN)),
    ]);
    let plans = [advanced_five_day_plan(), ideal_beginner_plan()];
    let ranked = PlanMatcher::new()
        .with_weights(weights)
        .score(&plans, &beginner_muscle());

    assert_eq!(ranked[0].plan.id, "ideal-beginner");
    assert_eq!(ranked[0].score, MatchScore::of(i64::MAX));
    // Both penalties pin at i64::MIN before the duration reward lands.
    assert_eq!(ranked[1].score, MatchScore::of(i64::MIN + 15));
}

// ============================================================================
// Ranking view and custom rules
// ============================================================================

#[test]
fn test_ranking_top_and_runners_up() {
    let catalog = sample_catalog();
    let ranking = PlanMatcher::new().rank(&catalog, &beginner_muscle());

    assert_eq!(ranking.len(), 6);
    assert_eq!(ranking.top().map(|s| s.plan.id.as_str()), Some("hypertrophy-101"));
    assert_eq!(
        ids(ranking.runners_up(3)),
        ["full-body-starter", "mobility-flow", "hiit-shred"]
    );
    assert_eq!(ranking.runners_up(10).len(), 5);
    assert!(ranking.runners_up(0).is_empty());
}

#[test]
fn test_ranking_of_small_catalogs() {
    let empty = PlanMatcher::new().rank(&[], &beginner_muscle());
    assert!(empty.is_empty());
    assert!(empty.top().is_none());
    assert!(empty.runners_up(3).is_empty());

    let plans = [bare_plan()];
    let single = PlanMatcher::new().rank(&plans, &beginner_muscle());
    assert_eq!(single.top().map(|s| s.score), Some(MatchScore::of(-10)));
    assert!(single.runners_up(3).is_empty());
    assert_eq!(single.into_vec().len(), 1);
}

#[test]
fn test_explain_all_follows_ranking() {
    let catalog = sample_catalog();
    let matcher = PlanMatcher::new();
    let answers = beginner_muscle();

    let ranked = matcher.score(&catalog, &answers);
    let explained = matcher.explain_all(&catalog, &answers);

    assert_eq!(explained.len(), ranked.len());
    for (e, s) in explained.iter().zip(&ranked) {
        assert_eq!(e.plan.id, s.plan.id);
        assert_eq!(e.score, s.score);
    }
}

struct LongSessionsOnly;

impl MatchRule for LongSessionsOnly {
    fn name(&self) -> &str {
        "LongSessionsOnly"
    }

    fn evaluate(&self, plan: &PlanSummary, _ctx: &crate::rule::RuleContext<'_>) -> RuleOutcome {
        match plan.avg_session_minutes {
            Some(minutes) if minutes >= 60 => RuleOutcome::with_reason(MatchScore::of(100), "Long"),
            _ => RuleOutcome::none(),
        }
    }
}

#[test]
fn test_custom_rule_set() {
    let matcher = PlanMatcher::with_rules((LongSessionsOnly, GoalRule));
    assert_eq!(matcher.rule_count(), 2);

    let catalog = sample_catalog();
    let ranked = matcher.score(&catalog, &beginner_muscle());
    // push-pull-legs: 100 + 20; powerbuilding-elite: 100 + 20; catalog order breaks the tie.
    assert_eq!(ids(&ranked)[..3], ["push-pull-legs", "powerbuilding-elite", "hypertrophy-101"]);
    assert_eq!(ranked[0].match_reasons, ["Long", "Aligned with your goal to build muscle"]);
}
