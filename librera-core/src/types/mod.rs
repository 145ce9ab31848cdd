//! Core value types for the catalog

mod book;
mod category;

pub use book::{Book, Cover};
pub use category::Category;

/// Index of a book in the catalog's flat list.
pub type BookId = usize;

/// Index of a category in the catalog's category set.
pub type CategoryId = usize;
