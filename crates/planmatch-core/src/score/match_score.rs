//! MatchScore - Single-level integer score

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;

use crate::error::PlanMatchError;

/// A plan's match score: a single signed integer, higher is better.
///
/// Arithmetic saturates at the `i64` bounds.
///
/// # Examples
///
/// ```
/// use planmatch_core::MatchScore;
///
/// let mismatch = MatchScore::of(-55);
/// let ideal = MatchScore::of(100);
///
/// assert!(ideal > mismatch);
/// assert_eq!(mismatch + ideal, MatchScore::of(45));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatchScore {
    score: i64,
}

impl MatchScore {
    /// The zero score.
    pub const ZERO: MatchScore = MatchScore { score: 0 };

    /// Creates a new MatchScore with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        MatchScore { score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.score
    }

    /// Returns true for a zero score.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.score == 0
    }

    /// Returns the absolute value of this score.
    pub fn abs(&self) -> Self {
        MatchScore::of(self.score.saturating_abs())
    }
}

impl Ord for MatchScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for MatchScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for MatchScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        MatchScore::of(self.score.saturating_add(other.score))
    }
}

impl AddAssign for MatchScore {
    fn add_assign(&mut self, other: Self) {
        self.score = self.score.saturating_add(other.score);
    }
}

impl Sub for MatchScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        MatchScore::of(self.score.saturating_sub(other.score))
    }
}

impl Neg for MatchScore {
    type Output = Self;

    fn neg(self) -> Self {
        MatchScore::of(self.score.saturating_neg())
    }
}

impl Sum for MatchScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(MatchScore::ZERO, Add::add)
    }
}

impl fmt::Debug for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchScore({})", self.score)
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

impl FromStr for MatchScore {
    type Err = PlanMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Tolerate an explicit sign on positive values
        let digits = s.strip_prefix('+').unwrap_or(s);

        digits
            .parse::<i64>()
            .map(MatchScore::of)
            .map_err(|e| PlanMatchError::InvalidScore {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<i64> for MatchScore {
    fn from(score: i64) -> Self {
        MatchScore::of(score)
    }
}
