//! # tomescout
//!
//! A terminal client for searching public book catalogs (the Google Books
//! volumes endpoint shape): one HTTP GET per search or page change,
//! defensive normalization of the loosely-typed JSON response, and
//! client-side pagination over a fixed-size result window.
//!
//! ## Architecture
//!
//! - **Query composition** (`query`): field filter + free text → one opaque
//!   `tag:text` query string
//! - **Catalog access** (`catalog`): request construction, sync HTTP via
//!   `ureq`, response-shape normalization behind the `VolumeSource` seam
//! - **Search state** (`search`): fetch-status state machine, pagination
//!   offset bookkeeping, sequence-tagged cycles with a stale-outcome guard
//! - **TUI** (`tui`): ratatui event loop rendering the controller state as
//!   a card grid with pagination affordances
//!
//! ## Library usage
//!
//! ```no_run
//! use tomescout::catalog::{VolumeSource, VolumesClient};
//! use tomescout::config::AppConfig;
//! use tomescout::query::QueryComposer;
//!
//! let config = AppConfig::default();
//! let mut composer = QueryComposer::default();
//! composer.replace_text("dune");
//! let query = composer.submit().unwrap();
//!
//! let client = VolumesClient::new(&config);
//! let page = client.fetch(&query, 0, config.page_size).unwrap();
//! println!("{} of {} results", page.books.len(), page.total);
//! ```

pub mod catalog;
pub mod config;
pub mod query;
pub mod search;
pub mod tui;
