mod recipe;
mod tip;

pub use recipe::{Difficulty, Recipe, UnknownDifficulty};
pub use tip::Tip;
