//! Core rule types.
//!
//! Identification and classification of the scoring rules that contribute
//! to a plan's match score.

use crate::score::MatchScore;

/// Reference to a match rule for identification.
///
/// # Example
///
/// ```
/// use planmatch_core::RuleRef;
///
/// let rr = RuleRef::new("planmatch", "WeeklyFrequency");
/// assert_eq!(rr.full_name(), "planmatch/WeeklyFrequency");
///
/// let bare = RuleRef::new("", "Custom");
/// assert_eq!(bare.full_name(), "Custom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleRef {
    /// Group the rule belongs to.
    pub group: String,
    /// Name of the rule.
    pub name: String,
}

impl RuleRef {
    /// Creates a new rule reference.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.group.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.group, self.name)
        }
    }
}

/// Direction in which a rule moved a plan's score.
///
/// # Example
///
/// ```
/// use planmatch_core::{ImpactType, MatchScore};
///
/// assert_eq!(ImpactType::of(MatchScore::of(-20)), ImpactType::Penalty);
/// assert_eq!(ImpactType::of(MatchScore::of(25)), ImpactType::Reward);
/// assert_eq!(ImpactType::of(MatchScore::ZERO), ImpactType::Neutral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactType {
    /// Subtracted from the score.
    Penalty,
    /// Left the score unchanged.
    Neutral,
    /// Added to the score.
    Reward,
}

impl ImpactType {
    /// Classifies a score impact by its sign.
    pub fn of(impact: MatchScore) -> Self {
        match impact.value() {
            v if v < 0 => ImpactType::Penalty,
            0 => ImpactType::Neutral,
            _ => ImpactType::Reward,
        }
    }
}
