//! Rasoi – The Tasty
//!
//! Single-page restaurant site rendered on the server with Axum and made
//! interactive with HTMX.
//!
//! # Architecture
//!
//! - **Catalogue**: immutable menu loaded once at startup
//! - **View**: per-visitor state (active category, theme, mobile menu) and
//!   the headless logic deriving visible content from it
//! - **UI**: HTML rendering of the page and its fragments
//! - **Web**: Axum routes wiring requests to view operations
//!
//! # Modules
//!
//! - [`catalogue`]: menu data model and loader
//! - [`view`]: view state, theme controller, storage and navigation seams
//! - [`session`]: per-visitor session storage
//! - [`ui`]: HTML rendering
//! - [`web`]: HTTP handlers and router
//! - [`site`]: outbound contact links
//! - [`config`]: layered configuration

#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod catalogue;
pub mod config;
pub mod server;
pub mod session;
pub mod site;
pub mod ui;
pub mod view;
pub mod web;

use std::sync::Arc;

use anyhow::Context;

use crate::catalogue::MenuCatalogue;
use crate::config::AppConfig;
use crate::session::SessionStore;
use crate::site::ContactLinks;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Menu loaded at startup.
    pub catalogue: Arc<MenuCatalogue>,
    /// Per-visitor view state.
    pub sessions: SessionStore,
    /// Outbound links derived from the site configuration.
    pub links: Arc<ContactLinks>,
    /// Application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Assemble state around an already loaded catalogue.
    pub fn new(config: Arc<AppConfig>, catalogue: MenuCatalogue) -> anyhow::Result<Self> {
        let links = ContactLinks::from_site(&config.site).context("invalid site links")?;

        Ok(Self {
            catalogue: Arc::new(catalogue),
            sessions: SessionStore::with_max_sessions(config.session.max_sessions),
            links: Arc::new(links),
            config,
        })
    }

    /// Load the configured catalogue (or the bundled one) and assemble state.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let catalogue = match &config.catalogue.path {
            Some(path) => MenuCatalogue::load(path)
                .with_context(|| format!("failed to load catalogue {}", path.display()))?,
            None => MenuCatalogue::bundled().context("bundled catalogue is malformed")?,
        };

        Self::new(config, catalogue)
    }
}
