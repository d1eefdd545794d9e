//! Domain model for plan matching.
//!
//! - [`PlanSummary`]: read-only catalog entry describing one training plan
//! - [`Answers`]: one completed questionnaire
//! - Closed vocabularies ([`Difficulty`], [`FocusTag`], [`Goal`],
//!   [`Experience`], [`DurationChoice`]) and the lookup tables between them
//!
//! Questionnaire values outside the vocabulary are kept as `Unrecognized`
//! variants instead of being rejected. They score as "no bonus, no penalty".

mod answers;
mod plan;
mod tables;
mod vocabulary;


pub use answers::{Answers, DurationChoice, Experience, Goal};
pub use plan::PlanSummary;
pub use tables::MinuteRange;
pub use vocabulary::{Difficulty, FocusTag};

/// Folds a label to lowercase with separators removed, so that
/// `"MUSCLE_BUILDING"` and `"MuscleBuilding"` compare equal.
pub(crate) fn fold_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
