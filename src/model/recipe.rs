use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How hard a recipe is to cook.
///
/// Serialized in lowercase (`easy`, `medium`, `hard`), which is also the
/// form accepted by [`Difficulty::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Returns the machine code used in catalog files and filter parameters.
    pub fn code(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Returns the label shown on the difficulty badge.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Легко",
            Difficulty::Medium => "Средне",
            Difficulty::Hard => "Сложно",
        }
    }

    /// Returns the badge colour name used by graphical front ends.
    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Easy => "green",
            Difficulty::Medium => "yellow",
            Difficulty::Hard => "red",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known difficulty code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

/// A single catalog entry.
///
/// Records are immutable once they are part of a [`Catalog`](crate::Catalog);
/// the catalog only hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique positive identifier within the catalog
    pub id: u32,
    /// Display title, never empty
    pub title: String,
    /// URI of the title image
    pub image: String,
    /// Cooking time in minutes
    pub time: u32,
    pub difficulty: Difficulty,
    /// Free-text category such as "Десерты"
    pub category: String,
    /// Ingredients in display order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps in cooking order
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Returns the steps paired with their one-indexed position.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.steps
            .iter()
            .enumerate()
            .map(|(idx, step)| (idx + 1, step.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 7,
            title: "Омлет".to_string(),
            image: "https://example.com/omelette.jpg".to_string(),
            time: 10,
            difficulty: Difficulty::Easy,
            category: "Завтраки".to_string(),
            ingredients: vec!["Яйца 3шт".to_string(), "Молоко 50мл".to_string()],
            steps: vec![
                "Взбейте яйца с молоком".to_string(),
                "Жарьте на среднем огне".to_string(),
            ],
        }
    }

    #[test]
    fn test_difficulty_codes_round_trip_through_from_str() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.code().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_difficulty_unknown_code() {
        let err = "extreme".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, UnknownDifficulty("extreme".to_string()));
        assert_eq!(err.to_string(), "Unknown difficulty: extreme");
    }

    #[test]
    fn test_difficulty_is_case_sensitive() {
        assert!("Easy".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_labels_and_colors() {
        assert_eq!(Difficulty::Easy.label(), "Легко");
        assert_eq!(Difficulty::Medium.label(), "Средне");
        assert_eq!(Difficulty::Hard.label(), "Сложно");
        assert_eq!(Difficulty::Easy.color(), "green");
        assert_eq!(Difficulty::Medium.color(), "yellow");
        assert_eq!(Difficulty::Hard.color(), "red");
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_numbered_steps_start_at_one() {
        let recipe = sample_recipe();
        let steps: Vec<_> = recipe.numbered_steps().collect();
        assert_eq!(
            steps,
            vec![(1, "Взбейте яйца с молоком"), (2, "Жарьте на среднем огне")]
        );
    }

    #[test]
    fn test_recipe_missing_lists_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id":1,"title":"Чай","image":"","time":5,"difficulty":"easy","category":"Напитки"}"#,
        )
        .unwrap();
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.steps.is_empty());
    }
}
