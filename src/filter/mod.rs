use crate::model::Recipe;

mod model;

pub use model::{DifficultyFilter, FilterCriteria, FilterError, TimeFilter};

/// Returns the recipes that satisfy all three criteria, in their original order.
///
/// A recipe is kept when its time is within the time bound, its difficulty
/// matches the difficulty filter, and the lowercased search text occurs in
/// its lowercased title or in any lowercased ingredient. An empty search
/// text matches every recipe.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    let query_lower = criteria.search.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_lowered(recipe, criteria, &query_lower))
        .collect()
}

/// Returns true if a single recipe passes the criteria.
pub fn matches(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    matches_lowered(recipe, criteria, &criteria.search.to_lowercase())
}

fn matches_lowered(recipe: &Recipe, criteria: &FilterCriteria, query_lower: &str) -> bool {
    criteria.time.accepts(recipe.time)
        && criteria.difficulty.accepts(recipe.difficulty)
        && matches_search(recipe, query_lower)
}

/// Substring match over the title and each ingredient
fn matches_search(recipe: &Recipe, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    recipe.title.to_lowercase().contains(query_lower)
        || recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;
    use crate::Catalog;

    fn titles(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.title.clone()).collect()
    }

    fn search(text: &str) -> FilterCriteria {
        FilterCriteria {
            search: text.to_string(),
            ..Default::default()
        }
    }

    fn all_criteria() -> Vec<FilterCriteria> {
        let searches = ["", "паста", "ЯЙЦА", "соль", "авокадо", "нет такого"];
        let difficulties = [
            DifficultyFilter::All,
            DifficultyFilter::Only(Difficulty::Easy),
            DifficultyFilter::Only(Difficulty::Medium),
            DifficultyFilter::Only(Difficulty::Hard),
        ];
        let mut out = Vec::new();
        for text in searches {
            for time in TimeFilter::ALL {
                for difficulty in difficulties {
                    out.push(FilterCriteria::new(text, time, difficulty));
                }
            }
        }
        out
    }

    #[test]
    fn test_default_criteria_return_full_catalog() {
        let catalog = Catalog::builtin();
        let results = filter_recipes(catalog.recipes(), &FilterCriteria::default());
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn test_time_up_to_15() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria::new("", TimeFilter::UpTo15, DifficultyFilter::All);
        let results = filter_recipes(catalog.recipes(), &criteria);
        assert_eq!(titles(&results), vec!["Тост с авокадо"]);
    }

    #[test]
    fn test_time_tiers_are_inclusive_upper_bounds() {
        let catalog = Catalog::builtin();
        let count = |time| {
            filter_recipes(
                catalog.recipes(),
                &FilterCriteria::new("", time, DifficultyFilter::All),
            )
            .len()
        };
        assert_eq!(count(TimeFilter::UpTo15), 1);
        assert_eq!(count(TimeFilter::UpTo30), 2);
        assert_eq!(count(TimeFilter::UpTo60), 2);
        assert_eq!(count(TimeFilter::All), 3);
    }

    #[test]
    fn test_short_recipe_passes_every_time_tier() {
        let mut quick = Catalog::builtin().recipes()[2].clone();
        quick.time = 10;
        for time in TimeFilter::ALL {
            let criteria = FilterCriteria::new("", time, DifficultyFilter::All);
            assert!(matches(&quick, &criteria), "{time} should accept 10 minutes");
        }
    }

    #[test]
    fn test_search_title_match() {
        let catalog = Catalog::builtin();
        let results = filter_recipes(catalog.recipes(), &search("авокадо"));
        assert_eq!(titles(&results), vec!["Тост с авокадо"]);
    }

    #[test]
    fn test_search_ingredient_match() {
        let catalog = Catalog::builtin();
        let results = filter_recipes(catalog.recipes(), &search("яйца"));
        assert_eq!(titles(&results), vec!["Паста Карбонара", "Шоколадный торт"]);
    }

    #[test]
    fn test_search_does_not_look_at_steps() {
        let catalog = Catalog::builtin();
        // Only appears in the cake's steps
        let results = filter_recipes(catalog.recipes(), &search("духовку"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let upper = filter_recipes(catalog.recipes(), &search("ПАСТА"));
        let lower = filter_recipes(catalog.recipes(), &search("паста"));
        assert_eq!(upper, lower);
        assert_eq!(titles(&upper), vec!["Паста Карбонара"]);
    }

    #[test]
    fn test_search_is_not_trimmed() {
        let catalog = Catalog::builtin();
        let results = filter_recipes(catalog.recipes(), &search(" торт "));
        assert!(results.is_empty());
    }

    #[test]
    fn test_difficulty_hard() {
        let catalog = Catalog::builtin();
        let criteria =
            FilterCriteria::new("", TimeFilter::All, DifficultyFilter::Only(Difficulty::Hard));
        let results = filter_recipes(catalog.recipes(), &criteria);
        assert_eq!(titles(&results), vec!["Шоколадный торт"]);
    }

    #[test]
    fn test_no_matches_yields_empty_list() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria::new(
            "авокадо",
            TimeFilter::All,
            DifficultyFilter::Only(Difficulty::Hard),
        );
        assert!(filter_recipes(catalog.recipes(), &criteria).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_recipes(&[], &search("паста")).is_empty());
    }

    #[test]
    fn test_results_are_ordered_subset() {
        let catalog = Catalog::builtin();
        for criteria in all_criteria() {
            let results = filter_recipes(catalog.recipes(), &criteria);
            let positions: Vec<usize> = results
                .iter()
                .map(|r| {
                    catalog
                        .recipes()
                        .iter()
                        .position(|c| c.id == r.id)
                        .expect("result must come from the catalog")
                })
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "order not preserved for {criteria:?}"
            );
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = Catalog::builtin();
        for criteria in all_criteria() {
            let once: Vec<Recipe> = filter_recipes(catalog.recipes(), &criteria)
                .into_iter()
                .cloned()
                .collect();
            let twice = filter_recipes(&once, &criteria);
            assert_eq!(twice.len(), once.len(), "not idempotent for {criteria:?}");
        }
    }

    #[test]
    fn test_tightening_difficulty_never_grows_results() {
        let catalog = Catalog::builtin();
        for criteria in all_criteria()
            .into_iter()
            .filter(|c| c.difficulty == DifficultyFilter::All)
        {
            let loose = filter_recipes(catalog.recipes(), &criteria).len();
            for difficulty in Difficulty::ALL {
                let tight = FilterCriteria {
                    difficulty: difficulty.into(),
                    ..criteria.clone()
                };
                assert!(filter_recipes(catalog.recipes(), &tight).len() <= loose);
            }
        }
    }

    #[test]
    fn test_empty_search_keeps_time_and_difficulty_set() {
        let catalog = Catalog::builtin();
        for criteria in all_criteria().into_iter().filter(|c| c.search.is_empty()) {
            let expected: Vec<&Recipe> = catalog
                .recipes()
                .iter()
                .filter(|r| criteria.time.accepts(r.time) && criteria.difficulty.accepts(r.difficulty))
                .collect();
            assert_eq!(filter_recipes(catalog.recipes(), &criteria), expected);
        }
    }

    #[test]
    fn test_parse_time_filter_codes() {
        assert_eq!("all".parse::<TimeFilter>(), Ok(TimeFilter::All));
        assert_eq!("15".parse::<TimeFilter>(), Ok(TimeFilter::UpTo15));
        assert_eq!("30".parse::<TimeFilter>(), Ok(TimeFilter::UpTo30));
        assert_eq!("60".parse::<TimeFilter>(), Ok(TimeFilter::UpTo60));
        assert_eq!(
            "45".parse::<TimeFilter>(),
            Err(FilterError::UnknownTimeFilter("45".to_string()))
        );
    }

    #[test]
    fn test_parse_difficulty_filter_codes() {
        assert_eq!("all".parse::<DifficultyFilter>(), Ok(DifficultyFilter::All));
        assert_eq!(
            "medium".parse::<DifficultyFilter>(),
            Ok(DifficultyFilter::Only(Difficulty::Medium))
        );
        assert_eq!(
            "insane".parse::<DifficultyFilter>(),
            Err(FilterError::UnknownDifficultyFilter("insane".to_string()))
        );
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(TimeFilter::UpTo60.label(), "До 1 часа");
        assert_eq!(DifficultyFilter::All.label(), "Любая сложность");
        assert_eq!(DifficultyFilter::Only(Difficulty::Easy).label(), "Легко");
    }

    #[test]
    fn test_criteria_is_default() {
        assert!(FilterCriteria::default().is_default());
        assert!(!search("а").is_default());
        assert!(!FilterCriteria::new("", TimeFilter::UpTo30, DifficultyFilter::All).is_default());
        assert!(!FilterCriteria::new("", TimeFilter::All, Difficulty::Easy.into()).is_default());

        let mut criteria = FilterCriteria::new("торт", TimeFilter::UpTo15, Difficulty::Hard.into());
        criteria.reset();
        assert!(criteria.is_default());
    }
}
