//! galleryx - paginated character gallery for the terminal
//!
//! Fetches character records from a remote catalog one page at a time, lays
//! them out in a five-wide grid and lets the user mark favourites for the
//! session.
//!
//! ## Architecture
//!
//! - `catalog_api`: one HTTP GET per page, behind the `CatalogSource` trait
//! - `page_fetch`: background task turning page requests into `AppEvent`s
//! - `pagination`: current page, the record list, staleness checks
//! - `favorites`: the session's favourite ids
//! - `ui_core::grid`: row chunking and the selection cursor
//! - `app` / `ui`: root state and the ratatui renderer
//!
//! ## Usage
//!
//! ```bash
//! cargo run -- --start-page 2
//! cargo run -- --offline
//! ```

// Core modules
pub mod config;
pub mod constants;
pub mod types;
pub mod util_text;

// Catalog access
pub mod catalog_api;
pub mod page_fetch;

// State
pub mod favorites;
pub mod pagination;

// Theme system
pub mod theme;

// UI core (grid layout, renderer-agnostic)
pub mod ui_core;

pub mod app;
pub mod ui;

// Platform abstraction layer
pub mod platform;

// Copy functionality
pub mod copy_api;

// Re-export commonly used types
pub use app::App;
pub use catalog_api::{CatalogError, CatalogSource, HttpCatalog, StaticCatalog};
pub use config::Config;
pub use favorites::Favorites;
pub use pagination::{ApplyOutcome, Pagination};
pub use types::{AppEvent, CharacterRecord, PageRequest};
