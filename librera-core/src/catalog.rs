//! The catalog: owner of every book and category for one session
//!
//! Loaded bottom-up from two delimited files (categories first, then books),
//! queried entirely in memory, and mutated through two operations — category
//! rename and bulk delete by author — each of which rewrites the persisted
//! file it affects wholesale.

use crate::config::CatalogConfig;
use crate::covers::CoverStore;
use crate::error::{CatalogError, Result};
use crate::table;
use crate::types::{Book, BookId, Category, CategoryId, Cover};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, info};

/// Header written when the categories file is rewritten.
const CATEGORIES_HEADER: &str = "Categoria,ficcion";

/// Header written when the books file is rewritten.
const BOOKS_HEADER: &str = "Titulo,Autor,Calificacion,Categoria,Portada,Ancho,Alto";

/// Report body when no category was synthesized during load.
const NO_NEW_CATEGORIES: &str = "no new categories";

/// Outcome of a successful bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// Number of distinct books removed from the catalog.
    pub removed: usize,
}

/// The in-memory catalog for one loaded session.
///
/// The flat book list is authoritative; each category's member list mirrors
/// it, holding indices into it. The two stay in 1:1 correspondence: every
/// book appears in the flat list and in exactly one category's members.
pub struct Catalog {
    config: CatalogConfig,
    books: Vec<Book>,
    categories: Vec<Category>,
    /// Categories synthesized during load because the books file referenced
    /// a name the categories file never declared, in creation order.
    new_categories: Vec<CategoryId>,
}

impl Catalog {
    /// Load a catalog from the two files named by `config`.
    ///
    /// The categories file is read first, in file order. The books file may
    /// then reference names the first file never declared; each such name
    /// synthesizes a non-fiction category on first sight and records it for
    /// [`Catalog::new_categories_report`]. A book whose cover file exists in
    /// `covers` gets a descriptor with the dimensions from its row. Any
    /// unparsable row aborts the whole load.
    pub fn load(config: CatalogConfig, covers: &dyn CoverStore) -> Result<Self> {
        let mut catalog = Self {
            config,
            books: Vec::new(),
            categories: Vec::new(),
            new_categories: Vec::new(),
        };
        catalog.load_categories()?;
        catalog.load_books(covers)?;
        info!(
            books = catalog.books.len(),
            categories = catalog.categories.len(),
            new_categories = catalog.new_categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn load_categories(&mut self) -> Result<()> {
        let path = self.config.categories_file.clone();
        for row in table::read_rows(&path)? {
            let name = row.field(0, &path)?;
            // Only the literal token counts as fiction; anything else is not.
            let fiction = row.field(1, &path)? == "true";
            self.categories.push(Category::new(name, fiction));
        }
        Ok(())
    }

    fn load_books(&mut self, covers: &dyn CoverStore) -> Result<()> {
        let path = self.config.books_file.clone();
        for row in table::read_rows(&path)? {
            let title = row.field(0, &path)?.to_owned();
            let author = row.field(1, &path)?.to_owned();
            let rating = row.parse_f64(2, &path)?;
            let category_name = row.field(3, &path)?.to_owned();
            let cover_file = row.field(4, &path)?.to_owned();
            let width = row.parse_u32(5, &path)?;
            let height = row.parse_u32(6, &path)?;

            let category = match self.category_index(&category_name) {
                Some(index) => index,
                None => {
                    let index = self.categories.len();
                    self.categories.push(Category::new(category_name.as_str(), false));
                    self.new_categories.push(index);
                    debug!(name = %category_name, "synthesized category for unknown name");
                    index
                }
            };

            let mut book = Book::new(title, author, rating, category);
            if !cover_file.is_empty() && covers.exists(&cover_file) {
                book.set_cover(Cover {
                    file: cover_file,
                    width,
                    height,
                });
            }

            let id = self.books.len();
            self.books.push(book);
            self.categories[category].add_book(id);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The flat book list, in load order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The category set, in file order followed by synthesis order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The persistence configuration this catalog was loaded with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    fn category_index(&self, name: &str) -> Option<CategoryId> {
        self.categories.iter().position(|c| c.name() == name)
    }

    /// Members of the first category whose name matches exactly. A name that
    /// matches no category yields an empty list, not an error.
    pub fn books_in_category(&self, name: &str) -> Vec<&Book> {
        match self.category_index(name) {
            Some(index) => self.categories[index]
                .members()
                .iter()
                .map(|&id| &self.books[id])
                .collect(),
            None => Vec::new(),
        }
    }

    /// First book with this exact title, in load order.
    pub fn find_book(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title == title)
    }

    /// Case-insensitive substring author search across every category, in
    /// category order then member order.
    pub fn search_by_author(&self, query: &str) -> Vec<&Book> {
        self.author_matches(query)
            .into_iter()
            .map(|id| &self.books[id])
            .collect()
    }

    fn author_matches(&self, query: &str) -> Vec<BookId> {
        let mut matches = Vec::new();
        for category in &self.categories {
            matches.extend(category.search_by_author(&self.books, query));
        }
        matches
    }

    /// Categories holding at least one book whose author matches exactly,
    /// in category order.
    pub fn categories_with_author(&self, author: &str) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|category| category.has_author(&self.books, author))
            .collect()
    }

    /// Mean rating across the flat list. NaN when the catalog is empty.
    pub fn average_rating(&self) -> f64 {
        let total: f64 = self.books.iter().map(|book| book.rating).sum();
        total / self.books.len() as f64
    }

    /// The category with the most members. Ties keep the earliest-seen
    /// leader; `None` when there are no categories.
    pub fn category_with_most_books(&self) -> Option<&Category> {
        let mut winner: Option<&Category> = None;
        for category in &self.categories {
            if winner.map_or(true, |leader| category.count() > leader.count()) {
                winner = Some(category);
            }
        }
        winner
    }

    /// The category with the best average rating, earliest-seen tie winner.
    /// The baseline sits below any real average, and an empty category's NaN
    /// average never beats it; `None` when no category has a real average.
    pub fn category_with_best_average(&self) -> Option<&Category> {
        let mut best = f64::NEG_INFINITY;
        let mut winner = None;
        for category in &self.categories {
            let average = category.average_rating(&self.books);
            if average > best {
                best = average;
                winner = Some(category);
            }
        }
        winner
    }

    /// How many books have no cover descriptor.
    pub fn books_without_cover(&self) -> usize {
        self.books.iter().filter(|book| !book.has_cover()).count()
    }

    /// Whether some author has books in two distinct categories. Scans the
    /// flat list in order and stops as soon as an author's second distinct
    /// category shows up.
    pub fn has_author_in_multiple_categories(&self) -> bool {
        let mut seen: HashMap<&str, HashSet<CategoryId>> = HashMap::new();
        for book in &self.books {
            let categories = seen.entry(book.author.as_str()).or_default();
            if categories.insert(book.category) && categories.len() > 1 {
                return true;
            }
        }
        false
    }

    /// Render the categories synthesized during load as one `name: count`
    /// line per category in creation order, or a fixed message when load
    /// created none. Pure; persisting the set is a separate call.
    pub fn new_categories_report(&self) -> String {
        if self.new_categories.is_empty() {
            return NO_NEW_CATEGORIES.to_owned();
        }
        let mut report = String::new();
        for &index in &self.new_categories {
            let category = &self.categories[index];
            report.push_str(&format!("{}: {}\n", category.name(), category.count()));
        }
        report
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Rewrite the categories file wholesale from the current set.
    pub fn save_categories(&self) -> Result<()> {
        table::write_rows(
            &self.config.categories_file,
            CATEGORIES_HEADER,
            self.categories
                .iter()
                .map(|category| format!("{},{}", category.name(), category.is_fiction())),
        )
    }

    /// Rewrite the books file wholesale from the flat list. A coverless book
    /// writes an empty cover path and zero dimensions.
    pub fn save_books(&self) -> Result<()> {
        table::write_rows(
            &self.config.books_file,
            BOOKS_HEADER,
            self.books.iter().map(|book| {
                let (cover, width, height) = match &book.cover {
                    Some(cover) => (cover.file.as_str(), cover.width, cover.height),
                    None => ("", 0, 0),
                };
                format!(
                    "{},{},{},{},{},{},{}",
                    book.title,
                    book.author,
                    book.rating,
                    self.categories[book.category].name(),
                    cover,
                    width,
                    height
                )
            }),
        )
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Rename a category and rewrite the categories file.
    ///
    /// The duplicate check runs over the entire set before the source lookup,
    /// so renaming from a nonexistent name onto an existing one reports the
    /// duplicate, not the missing source. A failure leaves the catalog and
    /// the persisted file untouched.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if self.category_index(new_name).is_some() {
            return Err(CatalogError::DuplicateCategory {
                name: new_name.to_owned(),
            });
        }
        let index = self
            .category_index(old_name)
            .ok_or_else(|| CatalogError::CategoryNotFound {
                name: old_name.to_owned(),
            })?;
        self.categories[index].rename(new_name);
        self.save_categories()?;
        info!(old = old_name, new = new_name, "category renamed");
        Ok(())
    }

    /// Delete every book whose author matches any of the comma-separated
    /// candidates, then rewrite the books file.
    ///
    /// Candidates are taken verbatim — no trimming, so whitespace around a
    /// name is significant — and each one is a catalog-wide substring author
    /// search. All-or-nothing: one candidate with zero matches fails the
    /// whole call with [`CatalogError::AuthorsNotFound`] and deletes nothing.
    /// On success the member lists are rebuilt from the compacted flat list
    /// and the count of distinct books removed is returned.
    pub fn delete_books_by_authors(&mut self, authors: &str) -> Result<DeleteOutcome> {
        let mut missing = Vec::new();
        let mut matched = Vec::new();
        let mut doomed: BTreeSet<BookId> = BTreeSet::new();

        for candidate in authors.split(',') {
            let ids = self.author_matches(candidate);
            if ids.is_empty() {
                missing.push(candidate.to_owned());
            } else {
                matched.push(candidate.to_owned());
                doomed.extend(ids);
            }
        }

        if !missing.is_empty() {
            let titles = doomed
                .iter()
                .map(|&id| self.books[id].title.clone())
                .collect();
            return Err(CatalogError::AuthorsNotFound {
                missing,
                matched,
                titles,
            });
        }

        let removed = doomed.len();
        let mut id = 0;
        self.books.retain(|_| {
            let keep = !doomed.contains(&id);
            id += 1;
            keep
        });
        self.rebuild_members();
        self.save_books()?;
        info!(removed, "books deleted by author");
        Ok(DeleteOutcome { removed })
    }

    /// Recompute every category's member list from the flat list. Deletion
    /// compacts the flat list, which invalidates the stored indices.
    fn rebuild_members(&mut self) {
        for category in &mut self.categories {
            category.clear_members();
        }
        for (id, book) in self.books.iter().enumerate() {
            self.categories[book.category].add_book(id);
        }
    }
}
