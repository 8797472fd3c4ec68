//! UniFFI bindings for cross-platform support (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Filter codes cross the boundary as strings (`all`, `15`, `easy`, ...)
//! and are parsed here, so native front ends share the exact same state
//! machine as the Rust one.

use crate::catalog::{Catalog, CatalogError as InternalCatalogError};
use crate::filter::{DifficultyFilter, FilterError, TimeFilter};
use crate::model::{Difficulty, Recipe, Tip};
use crate::render::render_page;
use crate::state::{CatalogView, ClickTarget, Event};
use camino::Utf8Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },
}

impl From<InternalCatalogError> for CatalogError {
    fn from(e: InternalCatalogError) -> Self {
        match e {
            InternalCatalogError::IoError(e) => CatalogError::IoError {
                message: e.to_string(),
            },
            InternalCatalogError::DirectoryNotFound(_)
            | InternalCatalogError::GlobError(_)
            | InternalCatalogError::PatternError(_)
            | InternalCatalogError::InvalidPath(_) => CatalogError::IoError {
                message: e.to_string(),
            },
            InternalCatalogError::YamlError(_)
            | InternalCatalogError::JsonError(_)
            | InternalCatalogError::UnsupportedFormat(_) => CatalogError::ParseError {
                message: e.to_string(),
            },
            InternalCatalogError::DuplicateRecipeId(_)
            | InternalCatalogError::DuplicateTipId(_)
            | InternalCatalogError::ZeroRecipeId
            | InternalCatalogError::EmptyTitle(_)
            | InternalCatalogError::ZeroTime(_) => CatalogError::InvalidCatalog {
                message: e.to_string(),
            },
        }
    }
}

impl From<FilterError> for CatalogError {
    fn from(e: FilterError) -> Self {
        CatalogError::InvalidFilter {
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for FfiDifficulty {
    fn from(d: Difficulty) -> Self {
        match d {
            Difficulty::Easy => FfiDifficulty::Easy,
            Difficulty::Medium => FfiDifficulty::Medium,
            Difficulty::Hard => FfiDifficulty::Hard,
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRecipe {
    pub id: u32,
    pub title: String,
    pub image: String,
    /// Cooking time in minutes
    pub time: u32,
    pub difficulty: FfiDifficulty,
    /// Badge label such as "Легко"
    pub difficulty_label: String,
    /// Badge colour name: green, yellow or red
    pub difficulty_color: String,
    pub category: String,
    pub ingredients: Vec<String>,
    /// Steps in order; the first one is step 1
    pub steps: Vec<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            id: r.id,
            title: r.title.clone(),
            image: r.image.clone(),
            time: r.time,
            difficulty: r.difficulty.into(),
            difficulty_label: r.difficulty.label().to_string(),
            difficulty_color: r.difficulty.color().to_string(),
            category: r.category.clone(),
            ingredients: r.ingredients.clone(),
            steps: r.steps.clone(),
        }
    }
}

#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTip {
    pub id: u32,
    pub title: String,
    pub text: String,
}

impl From<&Tip> for FfiTip {
    fn from(t: &Tip) -> Self {
        FfiTip {
            id: t.id,
            title: t.title.clone(),
            text: t.text.clone(),
        }
    }
}

/// FFI-safe catalog page.
///
/// Holds a catalog plus its view state. Every method forwards one event to
/// the reducer or reads the derived view.
#[derive(uniffi::Object)]
pub struct FfiCatalogView {
    inner: Mutex<CatalogView>,
}

impl FfiCatalogView {
    fn new(view: CatalogView) -> Self {
        FfiCatalogView {
            inner: Mutex::new(view),
        }
    }

    fn view(&self) -> MutexGuard<'_, CatalogView> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, event: Event) {
        self.view().dispatch(event);
    }
}

#[uniffi::export]
impl FfiCatalogView {
    /// Creates a view over the built-in catalog.
    #[uniffi::constructor]
    pub fn builtin() -> Arc<Self> {
        Arc::new(FfiCatalogView::new(CatalogView::new(Catalog::builtin())))
    }

    /// Creates a view over a catalog file or directory of catalog files.
    #[uniffi::constructor]
    pub fn from_path(path: String) -> Result<Arc<Self>, CatalogError> {
        let catalog = Catalog::load(Utf8Path::new(&path))?;
        Ok(Arc::new(FfiCatalogView::new(CatalogView::new(catalog))))
    }

    pub fn set_search(&self, text: String) {
        self.dispatch(Event::SetSearch(text));
    }

    /// Sets the time bound from its code: `all`, `15`, `30` or `60`.
    pub fn set_time_filter(&self, code: String) -> Result<(), CatalogError> {
        let time: TimeFilter = code.parse()?;
        self.dispatch(Event::SetTime(time));
        Ok(())
    }

    /// Sets the difficulty from its code: `all`, `easy`, `medium` or `hard`.
    pub fn set_difficulty_filter(&self, code: String) -> Result<(), CatalogError> {
        let difficulty: DifficultyFilter = code.parse()?;
        self.dispatch(Event::SetDifficulty(difficulty));
        Ok(())
    }

    pub fn reset_filters(&self) {
        self.dispatch(Event::ResetFilters);
    }

    pub fn select_recipe(&self, id: u32) {
        self.dispatch(Event::SelectRecipe(id));
    }

    pub fn dismiss(&self) {
        self.dispatch(Event::Dismiss);
    }

    pub fn click_backdrop(&self) {
        self.dispatch(Event::Click(ClickTarget::Backdrop));
    }

    pub fn click_overlay(&self) {
        self.dispatch(Event::Click(ClickTarget::Overlay));
    }

    pub fn search_text(&self) -> String {
        self.view().criteria().search.clone()
    }

    pub fn time_filter(&self) -> String {
        self.view().criteria().time.code().to_string()
    }

    pub fn difficulty_filter(&self) -> String {
        self.view().criteria().difficulty.code().to_string()
    }

    /// Returns the recipes matching the current filters, in catalog order.
    pub fn visible_recipes(&self) -> Vec<FfiRecipe> {
        self.view()
            .visible_recipes()
            .into_iter()
            .map(FfiRecipe::from)
            .collect()
    }

    /// Returns the recipe shown in the detail overlay, if any.
    pub fn selected_recipe(&self) -> Option<FfiRecipe> {
        self.view().selected_recipe().map(FfiRecipe::from)
    }

    /// Returns true when the reset control should be visible.
    pub fn show_reset(&self) -> bool {
        self.view().show_reset()
    }

    pub fn tips(&self) -> Vec<FfiTip> {
        self.view().tips().iter().map(FfiTip::from).collect()
    }

    /// Renders the current page as plain text.
    pub fn render_page(&self) -> String {
        render_page(&self.view())
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Returns every recipe of the built-in catalog.
#[uniffi::export]
pub fn builtin_recipes() -> Vec<FfiRecipe> {
    Catalog::builtin()
        .recipes()
        .iter()
        .map(FfiRecipe::from)
        .collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
