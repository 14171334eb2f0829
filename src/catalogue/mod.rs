//! Menu catalogue: the static set of categories and priced items.
//!
//! The catalogue is loaded exactly once at startup and shared read-only
//! (behind an `Arc`) with every request afterwards.
//!
//! # Structure
//!
//! - [`model`]: [`MenuCatalogue`], [`MenuCategory`], [`MenuItem`]
//! - [`loader`]: parsing from JSON/YAML documents and the bundled menu
//!
//! # Example
//!
//! ```rust
//! use rasoi_the_tasty::catalogue::MenuCatalogue;
//!
//! let catalogue = MenuCatalogue::from_json_str(
//!     r#"{"menu":[{"category":"Starters","items":[{"name":"Samosa","price":40}]}]}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(catalogue.first_category(), Some("Starters"));
//! ```

pub mod loader;
pub mod model;

pub use loader::CatalogueError;
pub use model::{MenuCatalogue, MenuCategory, MenuItem, format_price};
