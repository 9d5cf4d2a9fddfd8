//! Catalog access and index rendering for calc-index.
//!
//! This crate turns the static tool registry into the directory page: a
//! read-only catalog view, the card renderer, and the navigation seam a
//! router plugs into.

pub mod catalog;
pub mod navigation;
pub mod render;

pub use catalog::{CatalogError, ToolCatalog};
pub use navigation::{NavigationHistory, Navigator};
pub use render::{Card, IndexPage, IndexRenderer};
