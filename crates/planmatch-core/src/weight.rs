//! Named rule weights.
//!
//! Every numeric term a rule can add to a plan's score is addressed by a
//! [`WeightKey`]. Configuration refers to weights by their snake_case name;
//! the defaults reproduce the stock ranking.

use std::fmt;
use std::str::FromStr;

use crate::error::PlanMatchError;
use crate::score::MatchScore;

/// Identifies one tunable weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeightKey {
    /// Plan difficulty is acceptable for the stated experience.
    ExperienceMatch,
    /// Beginner answering for an exactly-Beginner plan.
    BeginnerExactBonus,
    /// Beginner facing a plan outside the acceptable set.
    BeginnerMismatchPenalty,
    /// Sessions per week equals the requested days.
    FrequencyExact,
    /// Sessions per week is one day off.
    FrequencyNear,
    /// Sessions per week is two or more days off.
    FrequencyFar,
    /// Plan focus intersects the goal's tags.
    GoalMatch,
    /// Session length inside the chosen bucket's range.
    DurationFit,
    /// Session length outside the range but close to the bucket code.
    DurationNear,
}

impl WeightKey {
    /// All keys, in rule-evaluation order.
    pub const ALL: [WeightKey; 9] = [
        WeightKey::ExperienceMatch,
        WeightKey::BeginnerExactBonus,
        WeightKey::BeginnerMismatchPenalty,
        WeightKey::FrequencyExact,
        WeightKey::FrequencyNear,
        WeightKey::FrequencyFar,
        WeightKey::GoalMatch,
        WeightKey::DurationFit,
        WeightKey::DurationNear,
    ];

    /// Configuration name of this weight.
    pub const fn name(self) -> &'static str {
        match self {
            WeightKey::ExperienceMatch => "experience_match",
            WeightKey::BeginnerExactBonus => "beginner_exact_bonus",
            WeightKey::BeginnerMismatchPenalty => "beginner_mismatch_penalty",
            WeightKey::FrequencyExact => "frequency_exact",
            WeightKey::FrequencyNear => "frequency_near",
            WeightKey::FrequencyFar => "frequency_far",
            WeightKey::GoalMatch => "goal_match",
            WeightKey::DurationFit => "duration_fit",
            WeightKey::DurationNear => "duration_near",
        }
    }

    /// Stock value of this weight.
    pub const fn default_weight(self) -> MatchScore {
        MatchScore::of(match self {
            WeightKey::ExperienceMatch => 30,
            WeightKey::BeginnerExactBonus => 10,
            WeightKey::BeginnerMismatchPenalty => -50,
            WeightKey::FrequencyExact => 25,
            WeightKey::FrequencyNear => 10,
            WeightKey::FrequencyFar => -20,
            WeightKey::GoalMatch => 20,
            WeightKey::DurationFit => 15,
            WeightKey::DurationNear => 5,
        })
    }

    /// Looks a key up by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl FromStr for WeightKey {
    type Err = PlanMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PlanMatchError::UnknownWeight(s.to_string()))
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
