//! Catalog access: request construction, the HTTP GET itself, and
//! response-shape normalization.
//!
//! The external catalog API is a black box returning a JSON document with
//! `items` and `totalItems`; everything it sends beyond the consumed
//! fields is ignored, and missing or wrongly-typed fields degrade to
//! documented fallbacks instead of failing the fetch.

pub mod client;
pub mod error;
pub mod model;

pub use client::{VolumeSource, VolumesClient};
pub use error::{CatalogError, CatalogResult};
pub use model::{normalize_response, BookSummary, ResultPage};
