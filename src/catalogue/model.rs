//! Catalogue data types.

use serde::{Deserialize, Serialize};

/// Currency symbol prefixed to every rendered price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A single dish. Items have no identity beyond their name and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Dish name as shown on the menu.
    pub name: String,
    /// Price in the implicit site currency.
    pub price: f64,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Price formatted for display, e.g. `₹40`.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// A named group of items. Names are unique within a catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    /// Category name, serialized as `category` in the data file.
    #[serde(rename = "category")]
    pub name: String,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Create a category from a name and its items.
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Ordered, immutable set of menu categories.
///
/// Construct through [`MenuCatalogue::new`] or the loader functions so the
/// shape checks run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuCatalogue {
    menu: Vec<MenuCategory>,
}

impl MenuCatalogue {
    pub(super) fn from_categories_unchecked(menu: Vec<MenuCategory>) -> Self {
        Self { menu }
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[MenuCategory] {
        &self.menu
    }

    /// Look up a category by exact name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&MenuCategory> {
        self.menu.iter().find(|c| c.name == name)
    }

    /// Whether a category with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    /// Name of the first category, the default selection.
    #[must_use]
    pub fn first_category(&self) -> Option<&str> {
        self.menu.first().map(|c| c.name.as_str())
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.menu.len()
    }

    /// True when the catalogue has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }
}

/// Format a price with the currency symbol.
///
/// Whole amounts render without a fractional part (`₹40`), others keep
/// their shortest exact representation (`₹40.5`).
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price}")
}
