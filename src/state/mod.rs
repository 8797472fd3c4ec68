//! View state for a catalog page.
//!
//! [`ViewState`] is the whole transient UI state: the filter criteria and the
//! recipe open in the detail view. It changes only through
//! [`ViewState::apply`], which takes one [`Event`] and returns the next state.
//! [`CatalogView`] bundles a state with the catalog it refers to for front
//! ends that want a single owner.

use crate::catalog::Catalog;
use crate::filter::{filter_recipes, DifficultyFilter, FilterCriteria, TimeFilter};
use crate::model::{Recipe, Tip};
use tracing::{debug, warn};

/// Which recipe, if any, is shown in the detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Id of a recipe present in the catalog
    Showing(u32),
}

/// Where a pointer click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the detail card
    Backdrop,
    /// Anything inside the detail card itself
    Overlay,
}

/// A discrete user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetSearch(String),
    SetTime(TimeFilter),
    SetDifficulty(DifficultyFilter),
    ResetFilters,
    /// A recipe card was clicked
    SelectRecipe(u32),
    /// The close control of the detail overlay was clicked
    Dismiss,
    Click(ClickTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub criteria: FilterCriteria,
    pub selection: Selection,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after handling `event`.
    ///
    /// Filter events never touch the selection and selection events never
    /// touch the criteria. Selecting an id that is not in `catalog` leaves
    /// the state as it was.
    pub fn apply(self, catalog: &Catalog, event: Event) -> ViewState {
        let ViewState {
            mut criteria,
            mut selection,
        } = self;

        match event {
            Event::SetSearch(text) => criteria.search = text,
            Event::SetTime(time) => criteria.time = time,
            Event::SetDifficulty(difficulty) => criteria.difficulty = difficulty,
            Event::ResetFilters => criteria.reset(),
            Event::SelectRecipe(id) => {
                if catalog.contains(id) {
                    selection = Selection::Showing(id);
                } else {
                    warn!(id, "ignoring selection of unknown recipe");
                }
            }
            Event::Dismiss | Event::Click(ClickTarget::Backdrop) => selection = Selection::None,
            // Clicks on the card content stop at the card
            Event::Click(ClickTarget::Overlay) => {}
        }

        debug!(?criteria, ?selection, "view state updated");
        ViewState {
            criteria,
            selection,
        }
    }

    /// Returns true when the reset control should be shown.
    pub fn show_reset(&self) -> bool {
        !self.criteria.is_default()
    }

    pub fn visible_recipes<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Recipe> {
        filter_recipes(catalog.recipes(), &self.criteria)
    }

    pub fn selected_recipe<'a>(&self, catalog: &'a Catalog) -> Option<&'a Recipe> {
        match self.selection {
            Selection::None => None,
            Selection::Showing(id) => catalog.get(id),
        }
    }
}

/// A catalog together with the view state built over it.
#[derive(Debug, Clone)]
pub struct CatalogView {
    catalog: Catalog,
    state: ViewState,
}

impl CatalogView {
    pub fn new(catalog: Catalog) -> Self {
        CatalogView {
            catalog,
            state: ViewState::default(),
        }
    }

    /// Applies one event to the current state.
    pub fn dispatch(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(&self.catalog, event);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.state.visible_recipes(&self.catalog)
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.state.selected_recipe(&self.catalog)
    }

    pub fn show_reset(&self) -> bool {
        self.state.show_reset()
    }

    pub fn tips(&self) -> &[Tip] {
        self.catalog.tips()
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
