uniffi::setup_scaffolding!();

pub mod catalog;
pub mod ffi;
pub mod filter;
pub mod model;
pub mod render;
pub mod state;

pub use catalog::{Catalog, CatalogError};
pub use filter::{filter_recipes, DifficultyFilter, FilterCriteria, FilterError, TimeFilter};
pub use model::*;
pub use state::{CatalogView, ClickTarget, Event, Selection, ViewState};
