//! Command-line front end for the truckload engine.
//!
//! This crate provides:
//! - Catalog loading from JSON files
//! - Export documents for single- and multi-truck results

mod catalog;
mod export;

pub use catalog::{Catalog, CatalogParser, ParseError};
pub use export::{ExportDocument, ExportError};
