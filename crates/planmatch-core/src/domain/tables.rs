//! Fixed lookup tables between questionnaire answers and catalog vocabulary.
//!
//! Unrecognized answers map to the empty set (or the full minute range), so
//! they neither earn nor lose points.

use super::answers::{DurationChoice, Experience, Goal};
use super::vocabulary::{Difficulty, FocusTag};

impl Experience {
    /// Plan difficulties considered appropriate for this experience level.
    pub fn acceptable_difficulties(&self) -> &'static [Difficulty] {
        match self {
            Experience::Beginner => &[Difficulty::Beginner],
            Experience::Intermediate => &[Difficulty::Intermediate, Difficulty::Beginner],
            Experience::Experienced => &[
                Difficulty::Advanced,
                Difficulty::Expert,
                Difficulty::Intermediate,
            ],
            Experience::Unrecognized(_) => &[],
        }
    }

    pub fn accepts(&self, difficulty: Option<Difficulty>) -> bool {
        difficulty.is_some_and(|d| self.acceptable_difficulties().contains(&d))
    }
}

impl Goal {
    /// Focus tags that serve this goal.
    pub fn target_tags(&self) -> &'static [FocusTag] {
        match self {
            Goal::BuildMuscle => &[FocusTag::MuscleBuilding, FocusTag::Bodybuilding],
            Goal::LoseFat => &[
                FocusTag::WeightLoss,
                FocusTag::BodyRecomposition,
                FocusTag::Cardio,
            ],
            Goal::GetStronger => &[FocusTag::Strength, FocusTag::Powerlifting],
            Goal::ImproveFitness => &[
                FocusTag::GeneralFitness,
                FocusTag::Cardio,
                FocusTag::Endurance,
            ],
            Goal::Unrecognized(_) => &[],
        }
    }

    /// True when at least one of `tags` serves this goal.
    pub fn is_served_by(&self, tags: &[FocusTag]) -> bool {
        let targets = self.target_tags();
        tags.iter().any(|tag| targets.contains(tag))
    }
}

/// Inclusive range of session minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinuteRange {
    pub min: u32,
    pub max: u32,
}

impl MinuteRange {
    /// Range that every session length satisfies.
    pub const ANY: MinuteRange = MinuteRange::new(0, 999);

    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, minutes: u32) -> bool {
        minutes >= self.min && minutes <= self.max
    }
}

impl DurationChoice {
    /// Session lengths that fit this bucket.
    pub const fn minute_range(self) -> MinuteRange {
        match self {
            DurationChoice::Twenty => MinuteRange::new(0, 25),
            DurationChoice::Thirty => MinuteRange::new(20, 45),
            DurationChoice::Fifty => MinuteRange::new(40, 65),
            DurationChoice::Seventy => MinuteRange::new(60, 999),
            DurationChoice::Unrecognized(_) => MinuteRange::ANY,
        }
    }
}
