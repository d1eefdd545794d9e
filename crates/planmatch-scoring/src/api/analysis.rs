//! Score analysis types for explaining a ranking.
//!
//! This module provides per-rule breakdowns of a plan's score and
//! catalog-wide summaries of how each rule moved the ranking.

use std::fmt;

use planmatch_core::{ImpactType, MatchScore, PlanSummary, RuleRef};

use crate::matcher::ScoredPlan;

/// One rule's contribution to one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Reference to the rule that produced this match.
    pub rule_ref: RuleRef,
    /// Score impact of the rule.
    pub score: MatchScore,
    /// User-facing reason, if the rule produced one.
    pub reason: Option<String>,
}

impl RuleMatch {
    /// Creates a new rule match.
    pub fn new(rule_ref: RuleRef, score: MatchScore, reason: Option<String>) -> Self {
        Self {
            rule_ref,
            score,
            reason,
        }
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.rule_ref.name
    }

    /// Returns whether the rule rewarded, penalized, or ignored the plan.
    pub fn impact_type(&self) -> ImpactType {
        ImpactType::of(self.score)
    }
}

/// Complete score explanation for one plan.
///
/// Unlike [`ScoredPlan`], reasons are not capped here.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanExplanation<'p> {
    /// The plan being explained.
    pub plan: &'p PlanSummary,
    /// The total score.
    pub score: MatchScore,
    /// Per-rule breakdown, in evaluation order.
    pub matches: Vec<RuleMatch>,
}

impl<'p> PlanExplanation<'p> {
    /// Creates an explanation, totalling the matches.
    pub fn new(plan: &'p PlanSummary, matches: Vec<RuleMatch>) -> Self {
        let score = matches.iter().map(|m| m.score).sum();
        Self {
            plan,
            score,
            matches,
        }
    }

    /// Returns every reason, in rule order.
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().filter_map(|m| m.reason.as_deref())
    }

    /// Looks up a rule's match by rule name.
    pub fn rule(&self, name: &str) -> Option<&RuleMatch> {
        self.matches.iter().find(|m| m.name() == name)
    }

    /// Returns the matches that lowered the score.
    pub fn penalties(&self) -> Vec<&RuleMatch> {
        self.matches
            .iter()
            .filter(|m| m.impact_type() == ImpactType::Penalty)
            .collect()
    }

    /// Converts into a ranked entry, keeping at most `max_reasons` reasons.
    pub fn into_scored(self, max_reasons: usize) -> ScoredPlan<'p> {
        let match_reasons = self
            .matches
            .into_iter()
            .filter_map(|m| m.reason)
            .take(max_reasons)
            .collect();

        ScoredPlan {
            plan: self.plan,
            score: self.score,
            match_reasons,
        }
    }
}

impl fmt::Display for PlanExplanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.plan.display_name(), self.score)?;
        for m in &self.matches {
            write!(f, "  {:<18} {:>+5}", m.name(), m.score.value())?;
            if let Some(reason) = &m.reason {
                write!(f, "  {}", reason)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// How one rule behaved across a whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBreakdown {
    /// Rule reference.
    pub rule_ref: RuleRef,
    /// Sum of the rule's impact over every plan.
    pub total: MatchScore,
    /// Plans the rule rewarded.
    pub rewarded: usize,
    /// Plans the rule penalized.
    pub penalized: usize,
}

impl RuleBreakdown {
    /// Summarizes explanations per rule, in rule order.
    ///
    /// Rules are matched by position, so all explanations must come from the
    /// same rule set.
    pub fn summarize(explanations: &[PlanExplanation<'_>]) -> Vec<RuleBreakdown> {
        let Some(first) = explanations.first() else {
            return Vec::new();
        };

        let mut breakdowns: Vec<RuleBreakdown> = first
            .matches
            .iter()
            .map(|m| RuleBreakdown {
                rule_ref: m.rule_ref.clone(),
                total: MatchScore::ZERO,
                rewarded: 0,
                penalized: 0,
            })
            .collect();

        for explanation in explanations {
            for (breakdown, m) in breakdowns.iter_mut().zip(&explanation.matches) {
                breakdown.total += m.score;
                match m.impact_type() {
                    ImpactType::Reward => breakdown.rewarded += 1,
                    ImpactType::Penalty => breakdown.penalized += 1,
                    ImpactType::Neutral => {}
                }
            }
        }

        breakdowns
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        &self.rule_ref.name
    }
}
