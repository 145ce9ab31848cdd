//! Error types for Librera Core

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A source file row could not be parsed. Fatal for the load that hit it;
    /// no partially-built catalog is exposed.
    #[error("malformed source {file} at line {line}: {message}")]
    MalformedSource {
        file: String,
        line: usize,
        message: String,
    },

    /// Rename target already names an existing category. No state changed.
    #[error("a category named \"{name}\" already exists")]
    DuplicateCategory { name: String },

    /// Rename source names no existing category. No state changed.
    #[error("no category named \"{name}\" exists")]
    CategoryNotFound { name: String },

    /// One or more bulk-delete candidates matched no book. Nothing was
    /// deleted; the message lists both sides plus the titles spared.
    #[error("{}", render_authors_not_found(.missing, .matched, .titles))]
    AuthorsNotFound {
        missing: Vec<String>,
        matched: Vec<String>,
        titles: Vec<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn render_authors_not_found(missing: &[String], matched: &[String], titles: &[String]) -> String {
    let mut message = String::from("authors with no matching books:\n");
    for author in missing {
        message.push_str(&format!("- {author}\n"));
    }
    message.push_str("\nauthors with matching books:\n");
    for author in matched {
        message.push_str(&format!("- {author}\n"));
    }
    message.push_str("\ntitles that were not removed:\n");
    for title in titles {
        message.push_str(&format!("- {title}\n"));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authors_not_found_lists_all_three_groups() {
        let err = CatalogError::AuthorsNotFound {
            missing: vec!["Nadie".to_owned()],
            matched: vec!["Julio Verne".to_owned()],
            titles: vec!["De la Tierra a la Luna".to_owned()],
        };
        let message = err.to_string();
        assert!(message.contains("authors with no matching books:\n- Nadie"));
        assert!(message.contains("authors with matching books:\n- Julio Verne"));
        assert!(message.contains("titles that were not removed:\n- De la Tierra a la Luna"));
    }
}
