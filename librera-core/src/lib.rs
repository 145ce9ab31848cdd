//! Librera Core Library
//!
//! This crate manages an in-memory catalog of books grouped into named
//! categories. The catalog is loaded from two delimited files (categories,
//! then books), queried and aggregated in memory, and mutated through two
//! operations — category rename and bulk delete by author — each of which
//! rewrites the persisted file it affects.

pub mod catalog;
pub mod config;
pub mod covers;
pub mod error;
pub mod table;
pub mod types;

pub use catalog::{Catalog, DeleteOutcome};
pub use config::CatalogConfig;
pub use covers::{CoverStore, LocalCovers, NoCovers};
pub use error::{CatalogError, Result};
pub use types::{Book, BookId, Category, CategoryId, Cover};
