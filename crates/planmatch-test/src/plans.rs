//! Plan fixtures.
//!
//! Scores in the doc comments are against
//! [`beginner_muscle`](crate::answers::beginner_muscle) with stock weights.

use planmatch_core::{Difficulty, FocusTag, PlanSummary};

/// Beginner, 3/week, MuscleBuilding, 35 min. Scores 100.
pub fn ideal_beginner_plan() -> PlanSummary {
    PlanSummary::new("ideal-beginner")
        .with_name("Foundations of Hypertrophy")
        .with_difficulty(Difficulty::Beginner)
        .with_sessions_per_week(3)
        .with_focus_tags([FocusTag::MuscleBuilding])
        .with_avg_session_minutes(35)
}

/// Advanced, 5/week, no tags, no duration. Scores -55.
pub fn advanced_five_day_plan() -> PlanSummary {
    PlanSummary::new("advanced-five-day")
        .with_difficulty(Difficulty::Advanced)
        .with_sessions_per_week(5)
}

/// Only an identifier. Scores -50 + 25 + 0 + 15 = -10.
pub fn bare_plan() -> PlanSummary {
    PlanSummary::new("bare")
}

/// Builds a plan with every scoring field set.
pub fn plan(
    id: &str,
    difficulty: Difficulty,
    sessions_per_week: u32,
    avg_session_minutes: u32,
    tags: &[FocusTag],
) -> PlanSummary {
    PlanSummary::new(id)
        .with_difficulty(difficulty)
        .with_sessions_per_week(sessions_per_week)
        .with_avg_session_minutes(avg_session_minutes)
        .with_focus_tags(tags.iter().copied())
}
