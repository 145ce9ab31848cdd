//! The Book value type and its optional cover descriptor

use super::CategoryId;
use serde::{Deserialize, Serialize};

/// Cover descriptor: the file name inside the cover store plus the
/// dimensions declared in the books file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cover {
    pub file: String,
    pub width: u32,
    pub height: u32,
}

/// A single book in the catalog.
///
/// The owning category is fixed at creation and never reassigned. After load
/// the only mutation a book sees is attaching or detaching its cover; it is
/// destroyed only through the catalog's bulk delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Title, the unique key within a catalog
    pub title: String,

    /// Author, free text
    pub author: String,

    /// Rating as a real number
    pub rating: f64,

    /// Index of the owning category in the catalog's category set
    pub category: CategoryId,

    /// Cover descriptor, if the cover file exists in the image store
    pub cover: Option<Cover>,
}

impl Book {
    /// Create a book bound to its category, without a cover.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        rating: f64,
        category: CategoryId,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            rating,
            category,
            cover: None,
        }
    }

    /// Whether a cover descriptor is attached.
    pub fn has_cover(&self) -> bool {
        self.cover.is_some()
    }

    /// Attach (or replace) the cover descriptor.
    pub fn set_cover(&mut self, cover: Cover) {
        self.cover = Some(cover);
    }

    /// Detach the cover descriptor.
    pub fn clear_cover(&mut self) {
        self.cover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_attach_and_detach() {
        let mut book = Book::new("Viaje al centro de la Tierra", "Julio Verne", 4.5, 0);
        assert!(!book.has_cover());

        book.set_cover(Cover {
            file: "viaje.png".to_owned(),
            width: 300,
            height: 500,
        });
        assert!(book.has_cover());

        book.clear_cover();
        assert!(!book.has_cover());
    }

    #[test]
    fn book_serialization() {
        let book = Book::new("Cosmos", "Carl Sagan", 4.8, 2);
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
