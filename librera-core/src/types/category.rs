//! Categories: named groups of books with a fiction flag

use super::{Book, BookId};
use serde::{Deserialize, Serialize};

/// A named group of books.
///
/// A category owns nothing: its member list holds indices into the catalog's
/// flat book list, and operations that need book data take that list as a
/// slice. Name uniqueness across the category set is the catalog's job, not
/// enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    fiction: bool,
    members: Vec<BookId>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>, fiction: bool) -> Self {
        Self {
            name: name.into(),
            fiction,
            members: Vec::new(),
        }
    }

    /// The category's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a fiction category.
    pub fn is_fiction(&self) -> bool {
        self.fiction
    }

    /// Member books in insertion order, as indices into the flat list.
    pub fn members(&self) -> &[BookId] {
        &self.members
    }

    /// Append a member. Does not touch the book's own category reference;
    /// keeping the two sides consistent is the catalog's responsibility.
    pub fn add_book(&mut self, id: BookId) {
        self.members.push(id);
    }

    /// Number of member books.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Mean rating across the members. NaN when the category is empty.
    pub fn average_rating(&self, books: &[Book]) -> f64 {
        let total: f64 = self.members.iter().map(|&id| books[id].rating).sum();
        total / self.members.len() as f64
    }

    /// Exact, case-sensitive author check; stops at the first match. An
    /// empty category has no authors.
    pub fn has_author(&self, books: &[Book], author: &str) -> bool {
        self.members.iter().any(|&id| books[id].author == author)
    }

    /// Case-insensitive substring author search in member order. The query
    /// need not be a full name: "ulio v" finds "Julio Verne".
    pub fn search_by_author(&self, books: &[Book], query: &str) -> Vec<BookId> {
        let query = query.to_lowercase();
        self.members
            .iter()
            .copied()
            .filter(|&id| books[id].author.to_lowercase().contains(&query))
            .collect()
    }

    /// In-place rename. Uniqueness is checked by the owning catalog.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    /// Drop every member; used when the catalog rebuilds the member index
    /// from the flat list.
    pub(crate) fn clear_members(&mut self) {
        self.members.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("De la Tierra a la Luna", "Julio Verne", 4.5, 0),
            Book::new("La guerra de los mundos", "H. G. Wells", 4.0, 0),
            Book::new("Viaje al centro de la Tierra", "Julio Verne", 4.8, 0),
        ]
    }

    fn sample_category() -> Category {
        let mut category = Category::new("Novela", true);
        for id in 0..3 {
            category.add_book(id);
        }
        category
    }

    #[test]
    fn count_matches_member_list() {
        let category = sample_category();
        assert_eq!(category.count(), category.members().len());
        assert_eq!(category.count(), 3);
    }

    #[test]
    fn average_rating_of_empty_category_is_nan() {
        let category = Category::new("Vacia", false);
        assert!(category.average_rating(&sample_books()).is_nan());
    }

    #[test]
    fn average_rating_is_the_mean() {
        let books = sample_books();
        let category = sample_category();
        let expected = (4.5 + 4.0 + 4.8) / 3.0;
        assert!((category.average_rating(&books) - expected).abs() < 1e-9);
    }

    #[test]
    fn has_author_is_exact_and_case_sensitive() {
        let books = sample_books();
        let category = sample_category();
        assert!(category.has_author(&books, "Julio Verne"));
        assert!(!category.has_author(&books, "julio verne"));
        assert!(!category.has_author(&books, "Julio"));
        assert!(!Category::new("Vacia", false).has_author(&books, "Julio Verne"));
    }

    #[test]
    fn search_by_author_is_case_insensitive_substring() {
        let books = sample_books();
        let category = sample_category();

        let hits = category.search_by_author(&books, "ulio v");
        assert_eq!(hits, vec![0, 2]);

        let hits = category.search_by_author(&books, "JULIO VERNE");
        assert_eq!(hits, vec![0, 2]);

        assert!(category.search_by_author(&books, "zz").is_empty());
    }

    #[test]
    fn rename_updates_the_name_in_place() {
        let mut category = sample_category();
        category.rename("Relatos");
        assert_eq!(category.name(), "Relatos");
    }
}
