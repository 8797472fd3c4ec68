use crate::model::{Difficulty, UnknownDifficulty};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing filter codes at the input boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown time filter: {0} (expected all, 15, 30 or 60)")]
    UnknownTimeFilter(String),

    #[error("Unknown difficulty filter: {0} (expected all, easy, medium or hard)")]
    UnknownDifficultyFilter(String),
}

impl From<UnknownDifficulty> for FilterError {
    fn from(e: UnknownDifficulty) -> Self {
        FilterError::UnknownDifficultyFilter(e.0)
    }
}

/// Upper bound on cooking time.
///
/// Each bounded tier means "at most N minutes", so the tiers overlap: a
/// ten-minute recipe passes all three of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFilter {
    #[default]
    All,
    UpTo15,
    UpTo30,
    UpTo60,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::All,
        TimeFilter::UpTo15,
        TimeFilter::UpTo30,
        TimeFilter::UpTo60,
    ];

    /// Returns the bound in minutes, or `None` when any time is accepted.
    pub fn max_minutes(&self) -> Option<u32> {
        match self {
            TimeFilter::All => None,
            TimeFilter::UpTo15 => Some(15),
            TimeFilter::UpTo30 => Some(30),
            TimeFilter::UpTo60 => Some(60),
        }
    }

    pub fn accepts(&self, minutes: u32) -> bool {
        self.max_minutes().map_or(true, |max| minutes <= max)
    }

    pub fn code(&self) -> &'static str {
        match self {
            TimeFilter::All => "all",
            TimeFilter::UpTo15 => "15",
            TimeFilter::UpTo30 => "30",
            TimeFilter::UpTo60 => "60",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeFilter::All => "Любое время",
            TimeFilter::UpTo15 => "До 15 минут",
            TimeFilter::UpTo30 => "До 30 минут",
            TimeFilter::UpTo60 => "До 1 часа",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFilter::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| FilterError::UnknownTimeFilter(s.to_string()))
    }
}

/// Difficulty restriction: either any difficulty or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(d) => d.code(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyFilter::All => "Любая сложность",
            DifficultyFilter::Only(d) => d.label(),
        }
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(d: Difficulty) -> Self {
        DifficultyFilter::Only(d)
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DifficultyFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DifficultyFilter::All);
        }
        Ok(DifficultyFilter::Only(s.parse::<Difficulty>()?))
    }
}

/// The search text and the two selector values that decide which recipes
/// are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Free text matched against titles and ingredients, used as typed
    pub search: String,
    pub time: TimeFilter,
    pub difficulty: DifficultyFilter,
}

impl FilterCriteria {
    pub fn new(
        search: impl Into<String>,
        time: TimeFilter,
        difficulty: DifficultyFilter,
    ) -> Self {
        FilterCriteria {
            search: search.into(),
            time,
            difficulty,
        }
    }

    /// Returns true when every criterion is at its default, i.e. when the
    /// reset control should be hidden.
    pub fn is_default(&self) -> bool {
        self.time == TimeFilter::All
            && self.difficulty == DifficultyFilter::All
            && self.search.is_empty()
    }

    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }
}
