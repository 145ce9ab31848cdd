//! Catalog configuration

use std::path::{Path, PathBuf};

/// Locations of the two persisted catalog files.
///
/// Passed in explicitly at construction; the catalog never reads the process
/// working directory or any other ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// The categories file: read at load, rewritten after a rename.
    pub categories_file: PathBuf,

    /// The books file: read at load, rewritten after a bulk delete.
    pub books_file: PathBuf,
}

impl CatalogConfig {
    /// Create a config from explicit file paths.
    pub fn new(categories_file: impl Into<PathBuf>, books_file: impl Into<PathBuf>) -> Self {
        Self {
            categories_file: categories_file.into(),
            books_file: books_file.into(),
        }
    }

    /// Conventional layout: `categorias.csv` and `libreria.csv` under one
    /// data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            categories_file: dir.join("categorias.csv"),
            books_file: dir.join("libreria.csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_dir_uses_conventional_file_names() {
        let config = CatalogConfig::in_dir("/data");
        assert_eq!(config.categories_file, PathBuf::from("/data/categorias.csv"));
        assert_eq!(config.books_file, PathBuf::from("/data/libreria.csv"));
    }
}
