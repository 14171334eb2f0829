//! Per-visitor session storage.
//!
//! Each browser gets a session holding its [`ViewState`](crate::view::ViewState),
//! keyed by a UUID carried in the `rasoi_session` cookie. Loading the page
//! always starts a fresh session; fragment requests reuse it.
//!
//! # Architecture
//!
//! - [`Session`]: one visitor's view state plus activity timestamps
//! - [`SessionStore`]: thread-safe map of active sessions with idle expiry
//!
//! # Example
//!
//! ```rust
//! use rasoi_the_tasty::catalogue::MenuCatalogue;
//! use rasoi_the_tasty::session::SessionStore;
//! use rasoi_the_tasty::view::{Theme, ViewState};
//!
//! let catalogue = MenuCatalogue::bundled().unwrap();
//! let store = SessionStore::new();
//! let session = store.create(ViewState::new(&catalogue, Theme::Dark));
//!
//! session.update(|view| view.toggle_menu());
//! assert!(session.read(|view| view.menu().is_open()));
//! ```

mod store;

pub use store::{SESSION_COOKIE, Session, SessionStore};
