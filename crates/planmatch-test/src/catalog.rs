//! A small mixed catalog.
//!
//! Expected ranking against [`beginner_muscle`](crate::answers::beginner_muscle)
//! with stock weights:
//!
//! | id | score |
//! |---|---|
//! | hypertrophy-101 | 100 |
//! | full-body-starter | 80 |
//! | mobility-flow | 80 |
//! | hiit-shred | 65 |
//! | push-pull-legs | -20 |
//! | powerbuilding-elite | -50 |
//!
//! `full-body-starter` and `mobility-flow` tie; catalog order decides.

use planmatch_core::{Difficulty, FocusTag, PlanSummary};

use crate::plans::plan;

/// Six plans in catalog order.
pub fn sample_catalog() -> Vec<PlanSummary> {
    vec![
        plan(
            "full-body-starter",
            Difficulty::Beginner,
            3,
            40,
            &[FocusTag::GeneralFitness],
        ),
        plan(
            "hypertrophy-101",
            Difficulty::Beginner,
            3,
            35,
            &[FocusTag::MuscleBuilding],
        ),
        plan(
            "push-pull-legs",
            Difficulty::Intermediate,
            4,
            60,
            &[FocusTag::MuscleBuilding, FocusTag::Strength],
        ),
        plan(
            "hiit-shred",
            Difficulty::Beginner,
            2,
            20,
            &[FocusTag::Hiit, FocusTag::WeightLoss],
        ),
        plan(
            "powerbuilding-elite",
            Difficulty::Expert,
            6,
            75,
            &[FocusTag::Powerlifting, FocusTag::Bodybuilding],
        ),
        plan(
            "mobility-flow",
            Difficulty::Beginner,
            3,
            20,
            &[FocusTag::Mobility],
        ),
    ]
}

/// Ids of [`sample_catalog`] in expected rank order.
pub const SAMPLE_RANKING: [&str; 6] = [
    "hypertrophy-101",
    "full-body-starter",
    "mobility-flow",
    "hiit-shred",
    "push-pull-legs",
    "powerbuilding-elite",
];

/// Scores matching [`SAMPLE_RANKING`].
pub const SAMPLE_SCORES: [i64; 6] = [100, 80, 80, 65, -20, -50];
