//! Catalog entry for one training plan.

use super::vocabulary::{Difficulty, FocusTag};

/// Ranking-relevant metadata of a trainer-authored plan.
///
/// Every field may be absent. Field names follow the catalog API
/// (`sessionsPerWeek`, `avgSessionTime`, `focusTags`). A difficulty outside
/// the known vocabulary is read as absent, so one odd row never fails a
/// whole catalog.
///
/// # Examples
///
/// ```
/// use planmatch_core::{Difficulty, FocusTag, PlanSummary};
///
/// let plan = PlanSummary::new("hypertrophy-101")
///     .with_difficulty(Difficulty::Beginner)
///     .with_sessions_per_week(3)
///     .with_avg_session_minutes(35)
///     .with_focus_tags([FocusTag::MuscleBuilding]);
///
/// assert_eq!(plan.sessions_per_week, Some(3));
/// assert!(PlanSummary::new("bare").focus_tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlanSummary {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,

    /// Display name; never used for scoring.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "de::lenient_difficulty")
    )]
    pub difficulty: Option<Difficulty>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub sessions_per_week: Option<u32>,

    #[cfg_attr(feature = "serde", serde(default, rename = "avgSessionTime"))]
    pub avg_session_minutes: Option<u32>,

    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "de::null_tags"))]
    pub focus_tags: Vec<FocusTag>,
}

impl PlanSummary {
    /// Creates a plan with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_sessions_per_week(mut self, sessions: u32) -> Self {
        self.sessions_per_week = Some(sessions);
        self
    }

    pub fn with_avg_session_minutes(mut self, minutes: u32) -> Self {
        self.avg_session_minutes = Some(minutes);
        self
    }

    pub fn with_focus_tags(mut self, tags: impl IntoIterator<Item = FocusTag>) -> Self {
        self.focus_tags = tags.into_iter().collect();
        self
    }

    /// Name for display, falling back to the identifier.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(feature = "serde")]
mod de {
    use serde::{Deserialize, Deserializer};

    use super::{Difficulty, FocusTag};

    // Blank, null and unknown difficulties all read as unset.
    pub(super) fn lenient_difficulty<'de, D>(
        deserializer: D,
    ) -> Result<Option<Difficulty>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?
            .and_then(|raw| raw.parse::<Difficulty>().ok()))
    }

    pub(super) fn null_tags<'de, D>(deserializer: D) -> Result<Vec<FocusTag>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<FocusTag>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
