//! View state and the logic that derives visible content from it.
//!
//! Everything here is headless: no HTTP, no HTML. The web layer owns one
//! [`ViewState`] per visitor session and injects the side-effecting
//! collaborators ([`PreferenceStore`], [`ThemeTarget`], [`SectionScroller`])
//! on each call.
//!
//! # Structure
//!
//! - [`state`]: [`ViewState`], category selection and the item list
//! - [`theme`]: [`Theme`] and the [`ThemeController`]
//! - [`storage`]: the [`PreferenceStore`] abstraction over "read/write a named string"
//! - [`navigation`]: mobile menu state machine and section scrolling

pub mod navigation;
pub mod state;
pub mod storage;
pub mod theme;

pub use navigation::{MenuState, SectionScroller};
pub use state::{ViewState, VisibleItem};
pub use storage::{DisabledStore, MemoryStore, PreferenceStore, StorageError};
pub use theme::{DocumentTheme, THEME_STORAGE_KEY, Theme, ThemeController, ThemeTarget};
