//! Questionnaire answer fixtures.
//!
//! # Example
//!
//! ```
//! use planmatch_test::answers::beginner_muscle;
//! use planmatch_core::Goal;
//!
//! assert_eq!(beginner_muscle().goal, Goal::BuildMuscle);
//! ```

use planmatch_core::Answers;

/// Build muscle, Beginner, 3 days/week, 30 minute bucket.
pub fn beginner_muscle() -> Answers {
    Answers::new("Build muscle", "Beginner", 3, 30)
}

/// Lose fat, Intermediate, 4 days/week, 50 minute bucket.
pub fn intermediate_fat_loss() -> Answers {
    Answers::new("Lose fat", "Intermediate", 4, 50)
}

/// Get stronger, Experienced, 5 days/week, 70 minute bucket.
pub fn experienced_strength() -> Answers {
    Answers::new("Get stronger", "Experienced", 5, 70)
}

/// [`beginner_muscle`] with typos in goal and experience.
pub fn misspelled() -> Answers {
    Answers::new("Build musle", "Begginer", 3, 30)
}
