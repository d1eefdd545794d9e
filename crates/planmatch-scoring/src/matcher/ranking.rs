// Ranked matcher output.

use planmatch_core::{MatchScore, PlanSummary};

/// One plan's place in a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlan<'p> {
    /// The catalog entry this score belongs to.
    pub plan: &'p PlanSummary,
    pub score: MatchScore,
    /// Reasons in rule order, capped at the matcher's `max_reasons`.
    pub match_reasons: Vec<String>,
}

/// Plans sorted by descending score.
///
/// The presentation layer shows [`top`](Self::top) prominently and a few
/// [`runners_up`](Self::runners_up) below it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking<'p> {
    entries: Vec<ScoredPlan<'p>>,
}

impl<'p> Ranking<'p> {
    /// Wraps an already-sorted list.
    pub fn new(entries: Vec<ScoredPlan<'p>>) -> Self {
        Self { entries }
    }

    /// Best plan, if any.
    pub fn top(&self) -> Option<&ScoredPlan<'p>> {
        self.entries.first()
    }

    /// Up to `n` plans following the top one.
    pub fn runners_up(&self, n: usize) -> &[ScoredPlan<'p>] {
        let start = self.entries.len().min(1);
        let end = self.entries.len().min(start + n);
        &self.entries[start..end]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredPlan<'p>> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScoredPlan<'p>] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<ScoredPlan<'p>> {
        self.entries
    }
}

impl<'p> IntoIterator for Ranking<'p> {
    type Item = ScoredPlan<'p>;
    type IntoIter = std::vec::IntoIter<ScoredPlan<'p>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, 'p> IntoIterator for &'a Ranking<'p> {
    type Item = &'a ScoredPlan<'p>;
    type IntoIter = std::slice::Iter<'a, ScoredPlan<'p>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
