//! Catalog store.
//!
//! A [`Catalog`] holds the immutable recipe and tip records that every other
//! module reads from. It is built from injected records, from the built-in
//! dataset, or from YAML/JSON catalog files on disk. All constructors
//! validate the records, so a `Catalog` value always satisfies the id and
//! field invariants.

use crate::model::{Recipe, Tip};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

mod builtin;

/// File extensions recognised as catalog files.
const CATALOG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Errors that can occur when building or loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipeId(u32),

    #[error("Duplicate tip id: {0}")]
    DuplicateTipId(u32),

    #[error("Recipe id must be positive")]
    ZeroRecipeId,

    #[error("Recipe {0} has an empty title")]
    EmptyTitle(u32),

    #[error("Recipe {0} has a cooking time of zero minutes")]
    ZeroTime(u32),

    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML catalog: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported catalog file: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),
}

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    recipes: Vec<Recipe>,
    #[serde(default)]
    tips: Vec<Tip>,
}

/// The immutable set of recipes and tips a catalog view is built over.
///
/// # Examples
///
/// ```
/// use cookbook_catalog::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.recipes().len(), 3);
/// assert!(catalog.get(2).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    tips: Vec<Tip>,
}

impl Catalog {
    /// Creates a catalog from injected records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a recipe id is zero or repeated, a title is
    /// empty, a cooking time is zero, or a tip id is repeated.
    pub fn new(recipes: Vec<Recipe>, tips: Vec<Tip>) -> Result<Self, CatalogError> {
        validate(&recipes, &tips)?;
        debug!(recipes = recipes.len(), tips = tips.len(), "catalog created");
        Ok(Catalog { recipes, tips })
    }

    /// Returns the catalog that ships with the crate: three recipes and
    /// three tips.
    pub fn builtin() -> Self {
        Catalog {
            recipes: builtin::recipes(),
            tips: builtin::tips(),
        }
    }

    /// Parses a catalog from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.recipes, file.tips)
    }

    /// Parses a catalog from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.recipes, file.tips)
    }

    /// Loads a catalog from a single `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let file = read_catalog_file(path)?;
        Self::new(file.recipes, file.tips)
    }

    /// Loads every catalog file directly inside `dir` and merges them.
    ///
    /// Files are read in path order; recipes and tips keep that order in
    /// the merged catalog. Uniqueness is checked across all files.
    /// Subdirectories and files with other extensions are ignored.
    pub fn from_dir(dir: &Utf8Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(dir.to_path_buf()));
        }

        // Directory names may contain glob metacharacters such as `[`
        let pattern = Utf8PathBuf::from(glob::Pattern::escape(dir.as_str())).join("*");
        let mut paths = Vec::new();
        for entry in glob::glob(pattern.as_str())? {
            let path = Utf8PathBuf::from_path_buf(entry?)
                .map_err(|p| CatalogError::InvalidPath(p.display().to_string()))?;
            if path.is_file() && is_catalog_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut merged = CatalogFile::default();
        for path in &paths {
            let file = read_catalog_file(path)?;
            merged.recipes.extend(file.recipes);
            merged.tips.extend(file.tips);
        }

        debug!(dir = %dir, files = paths.len(), "loaded catalog directory");
        Self::new(merged.recipes, merged.tips)
    }

    /// Loads a catalog from a file or a directory of catalog files.
    pub fn load(path: &Utf8Path) -> Result<Self, CatalogError> {
        if path.is_dir() {
            Self::from_dir(path)
        } else {
            Self::from_path(path)
        }
    }

    /// Serializes the catalog in the same shape [`Catalog::from_yaml_str`] reads.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the catalog in the same shape [`Catalog::from_json_str`] reads.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns all recipes in catalog order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Returns all tips in catalog order.
    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(recipes: &[Recipe], tips: &[Tip]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        if recipe.id == 0 {
            return Err(CatalogError::ZeroRecipeId);
        }
        if !seen.insert(recipe.id) {
            return Err(CatalogError::DuplicateRecipeId(recipe.id));
        }
        if recipe.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle(recipe.id));
        }
        if recipe.time == 0 {
            return Err(CatalogError::ZeroTime(recipe.id));
        }
    }

    let mut seen = HashSet::new();
    for tip in tips {
        if !seen.insert(tip.id) {
            return Err(CatalogError::DuplicateTipId(tip.id));
        }
    }

    Ok(())
}

fn is_catalog_file(path: &Utf8Path) -> bool {
    path.extension()
        .map(|ext| CATALOG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn read_catalog_file(path: &Utf8Path) -> Result<CatalogFile, CatalogError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_lowercase())
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;

    let file = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&std::fs::read_to_string(path)?)?,
        "json" => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    debug!(path = %path, "read catalog file");
    Ok(file)
}
