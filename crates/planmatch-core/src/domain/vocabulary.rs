//! Catalog vocabulary: plan difficulty tiers and focus tags.

use std::fmt;
use std::str::FromStr;

use super::fold_label;
use crate::error::PlanMatchError;

/// Difficulty tier of a training plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl FromStr for Difficulty {
    type Err = PlanMatchError;

    /// Accepts `Beginner` as well as the `BEGINNER` form used by the catalog API.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(s);
        Self::ALL
            .into_iter()
            .find(|d| fold_label(d.as_str()) == folded)
            .ok_or_else(|| PlanMatchError::UnknownDifficulty(s.to_string()))
    }
}

impl TryFrom<String> for Difficulty {
    type Error = PlanMatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for &'static str {
    fn from(value: Difficulty) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training emphasis attached to a plan.
///
/// Labels the vocabulary does not know deserialize to [`FocusTag::Other`],
/// which never matches any goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "&'static str"))]
pub enum FocusTag {
    Strength,
    MuscleBuilding,
    Bodybuilding,
    Powerlifting,
    WeightLoss,
    BodyRecomposition,
    Cardio,
    Endurance,
    GeneralFitness,
    Mobility,
    Hiit,
    Other,
}

impl FocusTag {
    /// Every tag the vocabulary defines, excluding [`FocusTag::Other`].
    pub const KNOWN: [FocusTag; 11] = [
        FocusTag::Strength,
        FocusTag::MuscleBuilding,
        FocusTag::Bodybuilding,
        FocusTag::Powerlifting,
        FocusTag::WeightLoss,
        FocusTag::BodyRecomposition,
        FocusTag::Cardio,
        FocusTag::Endurance,
        FocusTag::GeneralFitness,
        FocusTag::Mobility,
        FocusTag::Hiit,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FocusTag::Strength => "Strength",
            FocusTag::MuscleBuilding => "MuscleBuilding",
            FocusTag::Bodybuilding => "Bodybuilding",
            FocusTag::Powerlifting => "Powerlifting",
            FocusTag::WeightLoss => "WeightLoss",
            FocusTag::BodyRecomposition => "BodyRecomposition",
            FocusTag::Cardio => "Cardio",
            FocusTag::Endurance => "Endurance",
            FocusTag::GeneralFitness => "GeneralFitness",
            FocusTag::Mobility => "Mobility",
            FocusTag::Hiit => "Hiit",
            FocusTag::Other => "Other",
        }
    }

    /// Lenient lookup: unknown labels become [`FocusTag::Other`].
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(FocusTag::Other)
    }
}

impl FromStr for FocusTag {
    type Err = PlanMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_label(s);
        Self::KNOWN
            .into_iter()
            .find(|tag| fold_label(tag.as_str()) == folded)
            .ok_or_else(|| PlanMatchError::UnknownFocusTag(s.to_string()))
    }
}

impl From<String> for FocusTag {
    fn from(value: String) -> Self {
        FocusTag::from_label(&value)
    }
}

impl From<FocusTag> for &'static str {
    fn from(value: FocusTag) -> Self {
        value.as_str()
    }
}

impl fmt::Display for FocusTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
