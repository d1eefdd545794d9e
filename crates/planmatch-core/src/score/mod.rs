//! Score type for ranking plans.
//!
//! A plan's match score is the sum of every rule's signed impact. Scores
//! are immutable and implement the arithmetic the rules need.

mod match_score;

#[cfg(test)]
mod tests;

pub use match_score::MatchScore;
