//! Text and JSON rendering of rankings and explanations.

use std::fmt::Write as _;
use std::io::IsTerminal;

use anyhow::Context;
use owo_colors::OwoColorize;
use planmatch::{MatchScore, PlanExplanation, Ranking, RuleBreakdown, ScoredPlan};
use serde::Serialize;

/// Whether text output is colored.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    color: bool,
}

impl Palette {
    pub const PLAIN: Palette = Palette { color: false };

    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    fn heading(self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn score(self, score: MatchScore) -> String {
        let text = format!("[{}]", score);
        if !self.color {
            return text;
        }
        match score.value() {
            v if v > 0 => text.green().to_string(),
            v if v < 0 => text.red().to_string(),
            _ => text.dimmed().to_string(),
        }
    }
}

pub fn ranking_text(ranking: &Ranking<'_>, runners_up: usize, palette: Palette) -> String {
    let mut out = String::new();
    let Some(top) = ranking.top() else {
        out.push_str("No plans to rank.\n");
        return out;
    };

    let _ = writeln!(out, "{}", palette.heading("Best match"));
    push_entry(&mut out, 1, top, palette);

    let rest = ranking.runners_up(runners_up);
    if !rest.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", palette.heading("Runners-up"));
        for (i, scored) in rest.iter().enumerate() {
            push_entry(&mut out, i + 2, scored, palette);
        }
    }
    out
}

fn push_entry(out: &mut String, rank: usize, scored: &ScoredPlan<'_>, palette: Palette) {
    let _ = writeln!(
        out,
        "  {}. {}  {}",
        rank,
        scored.plan.display_name(),
        palette.score(scored.score)
    );
    for reason in &scored.match_reasons {
        let _ = writeln!(out, "     + {}", reason);
    }
}

pub fn explanations_text(
    explanations: &[PlanExplanation<'_>],
    breakdown: &[RuleBreakdown],
    palette: Palette,
) -> String {
    let mut out = String::new();
    if explanations.is_empty() {
        out.push_str("No plans to explain.\n");
        return out;
    }

    for (i, explanation) in explanations.iter().enumerate() {
        let _ = write!(out, "#{} {}", i + 1, explanation);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", palette.heading("Rule totals"));
    for rule in breakdown {
        let _ = writeln!(
            out,
            "  {:<18} {:>+6}  rewarded {}, penalized {}",
            rule.name(),
            rule.total.value(),
            rule.rewarded,
            rule.penalized
        );
    }
    out
}

// ============================================================================
// JSON views
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlanView<'a> {
    pub rank: usize,
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub score: i64,
    pub match_reasons: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct RankingView<'a> {
    pub ranking: Vec<ScoredPlanView<'a>>,
}

impl<'a> RankingView<'a> {
    pub fn new(ranking: &'a Ranking<'_>) -> Self {
        let ranking = ranking
            .iter()
            .enumerate()
            .map(|(i, s)| ScoredPlanView {
                rank: i + 1,
                id: &s.plan.id,
                name: s.plan.name.as_deref(),
                score: s.score.value(),
                match_reasons: &s.match_reasons,
            })
            .collect();
        Self { ranking }
    }
}

#[derive(Debug, Serialize)]
pub struct RuleView<'a> {
    pub rule: String,
    pub score: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ExplanationView<'a> {
    pub rank: usize,
    pub id: &'a str,
    pub score: i64,
    pub rules: Vec<RuleView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct RuleTotalView {
    pub rule: String,
    pub total: i64,
    pub rewarded: usize,
    pub penalized: usize,
}

#[derive(Debug, Serialize)]
pub struct ExplainView<'a> {
    pub plans: Vec<ExplanationView<'a>>,
    pub totals: Vec<RuleTotalView>,
}

impl<'a> ExplainView<'a> {
    pub fn new(explanations: &'a [PlanExplanation<'_>], breakdown: &[RuleBreakdown]) -> Self {
        let plans = explanations
            .iter()
            .enumerate()
            .map(|(i, e)| ExplanationView {
                rank: i + 1,
                id: &e.plan.id,
                score: e.score.value(),
                rules: e
                    .matches
                    .iter()
                    .map(|m| RuleView {
                        rule: m.rule_ref.full_name(),
                        score: m.score.value(),
                        reason: m.reason.as_deref(),
                    })
                    .collect(),
            })
            .collect();
        let totals = breakdown
            .iter()
            .map(|b| RuleTotalView {
                rule: b.rule_ref.full_name(),
                total: b.total.value(),
                rewarded: b.rewarded,
                penalized: b.penalized,
            })
            .collect();
        Self { plans, totals }
    }
}

pub fn write_json<T: Serialize>(v: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(v).context("serialize json")?;
    println!("{}", s);
    Ok(())
}
