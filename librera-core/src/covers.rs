//! Cover-image store collaborator
//!
//! The catalog only ever asks whether a cover file exists; dimensions come
//! from the books file and image bytes are never read.

use std::path::{Component, Path, PathBuf};

/// Answers whether a named cover file exists in the external image store.
pub trait CoverStore {
    fn exists(&self, file_name: &str) -> bool;
}

/// Cover store backed by a fixed base directory on the local filesystem.
pub struct LocalCovers {
    base: PathBuf,
}

impl LocalCovers {
    /// Create a store rooted at the given base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Resolve a file name under the base directory, rejecting empty names
    /// and any component that would escape the root.
    fn full_path(&self, file_name: &str) -> Option<PathBuf> {
        let mut normalized = PathBuf::new();
        for component in Path::new(file_name).components() {
            match component {
                Component::Normal(c) => normalized.push(c),
                Component::CurDir => {} // Ignore "."
                Component::ParentDir | Component::Prefix(_) | Component::RootDir => return None,
            }
        }
        if normalized.as_os_str().is_empty() {
            return None;
        }
        Some(self.base.join(normalized))
    }
}

impl CoverStore for LocalCovers {
    fn exists(&self, file_name: &str) -> bool {
        self.full_path(file_name).is_some_and(|path| path.exists())
    }
}

/// A store with no covers at all; handy when covers are irrelevant.
pub struct NoCovers;

impl CoverStore for NoCovers {
    fn exists(&self, _file_name: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_files_under_the_base_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("portada.png"), b"png").unwrap();

        let store = LocalCovers::new(dir.path());
        assert!(store.exists("portada.png"));
        assert!(!store.exists("ausente.png"));
    }

    #[test]
    fn rejects_escaping_and_empty_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalCovers::new(dir.path());
        assert!(!store.exists("../portada.png"));
        assert!(!store.exists("/etc/passwd"));
        assert!(!store.exists(""));
    }

    #[test]
    fn no_covers_never_matches() {
        assert!(!NoCovers.exists("portada.png"));
    }
}
