//! Questionnaire answers.
//!
//! The quiz offers fixed choices, but answers may arrive from stale clients
//! or hand-edited files. Anything outside the choice set is preserved in an
//! `Unrecognized` variant rather than rejected.

use std::fmt;

/// The user's training goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Goal {
    BuildMuscle,
    LoseFat,
    GetStronger,
    ImproveFitness,
    Unrecognized(String),
}

impl Goal {
    pub const CHOICES: [Goal; 4] = [
        Goal::BuildMuscle,
        Goal::LoseFat,
        Goal::GetStronger,
        Goal::ImproveFitness,
    ];

    /// Quiz label, e.g. `"Build muscle"`. Unrecognized goals return their raw text.
    pub fn label(&self) -> &str {
        match self {
            Goal::BuildMuscle => "Build muscle",
            Goal::LoseFat => "Lose fat",
            Goal::GetStronger => "Get stronger",
            Goal::ImproveFitness => "Improve fitness",
            Goal::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Goal::Unrecognized(_))
    }

    /// Exact-label lookup. `"build muscle"` is not `"Build muscle"`.
    pub fn from_label(label: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|goal| goal.label() == label)
            .unwrap_or_else(|| Goal::Unrecognized(label.to_string()))
    }
}

impl From<&str> for Goal {
    fn from(value: &str) -> Self {
        Goal::from_label(value)
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::from_label(&value)
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        match value {
            Goal::Unrecognized(raw) => raw,
            goal => goal.label().to_string(),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's self-reported training experience.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum Experience {
    Beginner,
    Intermediate,
    Experienced,
    Unrecognized(String),
}

impl Experience {
    pub const CHOICES: [Experience; 3] = [
        Experience::Beginner,
        Experience::Intermediate,
        Experience::Experienced,
    ];

    pub fn label(&self) -> &str {
        match self {
            Experience::Beginner => "Beginner",
            Experience::Intermediate => "Intermediate",
            Experience::Experienced => "Experienced",
            Experience::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Experience::Unrecognized(_))
    }

    /// Exact-label lookup, same rules as [`Goal::from_label`].
    pub fn from_label(label: &str) -> Self {
        Self::CHOICES
            .into_iter()
            .find(|exp| exp.label() == label)
            .unwrap_or_else(|| Experience::Unrecognized(label.to_string()))
    }
}

impl From<&str> for Experience {
    fn from(value: &str) -> Self {
        Experience::from_label(value)
    }
}

impl From<String> for Experience {
    fn from(value: String) -> Self {
        Experience::from_label(&value)
    }
}

impl From<Experience> for String {
    fn from(value: Experience) -> Self {
        match value {
            Experience::Unrecognized(raw) => raw,
            exp => exp.label().to_string(),
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preferred session length, as the midpoint code of one of four quiz buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub enum DurationChoice {
    Twenty,
    Thirty,
    Fifty,
    Seventy,
    Unrecognized(u32),
}

impl DurationChoice {
    pub const CHOICES: [DurationChoice; 4] = [
        DurationChoice::Twenty,
        DurationChoice::Thirty,
        DurationChoice::Fifty,
        DurationChoice::Seventy,
    ];

    /// Bucket code in minutes.
    pub const fn code(self) -> u32 {
        match self {
            DurationChoice::Twenty => 20,
            DurationChoice::Thirty => 30,
            DurationChoice::Fifty => 50,
            DurationChoice::Seventy => 70,
            DurationChoice::Unrecognized(code) => code,
        }
    }

    pub const fn from_code(code: u32) -> Self {
        match code {
            20 => DurationChoice::Twenty,
            30 => DurationChoice::Thirty,
            50 => DurationChoice::Fifty,
            70 => DurationChoice::Seventy,
            other => DurationChoice::Unrecognized(other),
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self, DurationChoice::Unrecognized(_))
    }
}

impl From<u32> for DurationChoice {
    fn from(value: u32) -> Self {
        DurationChoice::from_code(value)
    }
}

impl From<DurationChoice> for u32 {
    fn from(value: DurationChoice) -> Self {
        value.code()
    }
}

impl fmt::Display for DurationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.code())
    }
}

/// One completed questionnaire.
///
/// # Examples
///
/// ```
/// use planmatch_core::{Answers, DurationChoice, Experience, Goal};
///
/// let answers = Answers::new("Build muscle", "Beginner", 3, 30);
/// assert_eq!(answers.goal, Goal::BuildMuscle);
/// assert_eq!(answers.experience, Experience::Beginner);
/// assert_eq!(answers.duration, DurationChoice::Thirty);
///
/// let typo = Answers::new("Build musle", "Beginner", 3, 30);
/// assert!(!typo.goal.is_recognized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Answers {
    pub goal: Goal,
    pub experience: Experience,
    pub days_per_week: u32,
    pub duration: DurationChoice,
}

impl Answers {
    pub fn new(
        goal: impl Into<Goal>,
        experience: impl Into<Experience>,
        days_per_week: u32,
        duration: impl Into<DurationChoice>,
    ) -> Self {
        Self {
            goal: goal.into(),
            experience: experience.into(),
            days_per_week,
            duration: duration.into(),
        }
    }
}
