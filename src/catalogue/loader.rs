//! Catalogue loading and shape checks.
//!
//! The catalogue document is trusted, bundled data rather than user input,
//! so the checks here only guard against a malformed file slipping into a
//! build. Any error is fatal at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{MenuCatalogue, MenuCategory};

/// Menu shipped inside the binary.
const BUNDLED_MENU: &str = include_str!("../../data/menu.json");

/// Errors raised while loading a catalogue document.
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or lacks the `menu` field.
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid YAML or lacks the `menu` field.
    #[error("invalid catalogue YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported catalogue format: {0}")]
    UnsupportedFormat(PathBuf),

    /// A category has an empty or whitespace-only name.
    #[error("category #{index} has an empty name")]
    EmptyCategoryName {
        /// Zero-based position of the category.
        index: usize,
    },

    /// Two categories share a name.
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// A price is negative, NaN or infinite.
    #[error("invalid price {price} for {item:?} in {category:?}")]
    InvalidPrice {
        /// Category containing the item.
        category: String,
        /// Item name.
        item: String,
        /// Offending price.
        price: f64,
    },
}

impl MenuCatalogue {
    /// Build a catalogue from categories already in memory.
    pub fn new(categories: Vec<MenuCategory>) -> Result<Self, CatalogueError> {
        validate(Self::from_categories_unchecked(categories))
    }

    /// Parse a JSON catalogue document.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogueError> {
        let raw: MenuCatalogue = serde_json::from_str(source)?;
        validate(raw)
    }

    /// Parse a YAML catalogue document.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogueError> {
        let raw: MenuCatalogue = serde_yaml::from_str(source)?;
        validate(raw)
    }

    /// Load a catalogue file, picking the parser from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogueError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml" | "yml") => Self::from_yaml_str,
            _ => return Err(CatalogueError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalogue = parse(&source)?;
        tracing::info!(
            name: "catalogue.loaded",
            path = %path.display(),
            categories = catalogue.len(),
            "Catalogue loaded from file"
        );
        Ok(catalogue)
    }

    /// The menu compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogueError> {
        Self::from_json_str(BUNDLED_MENU)
    }
}

fn validate(raw: MenuCatalogue) -> Result<MenuCatalogue, CatalogueError> {
    let mut seen = HashSet::new();

    for (index, category) in raw.categories().iter().enumerate() {
        if category.name.trim().is_empty() {
            return Err(CatalogueError::EmptyCategoryName { index });
        }
        if !seen.insert(category.name.as_str()) {
            return Err(CatalogueError::DuplicateCategory(category.name.clone()));
        }
        check_prices(category)?;
    }

    Ok(raw)
}

fn check_prices(category: &MenuCategory) -> Result<(), CatalogueError> {
    match category
        .items
        .iter()
        .find(|item| !item.price.is_finite() || item.price < 0.0)
    {
        Some(item) => Err(CatalogueError::InvalidPrice {
            category: category.name.clone(),
            item: item.name.clone(),
            price: item.price,
        }),
        None => Ok(()),
    }
}
