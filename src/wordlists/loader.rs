//! Catalog loading utilities
//!
//! Reads custom catalogs from tab-separated files: one `word<TAB>hint` per line.

use super::{Catalog, CatalogError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a catalog from a file
///
/// Blank lines and lines starting with `#` are skipped. A line without a tab is
/// a word with an empty hint. Invalid words are skipped with a warning.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, or
/// `CatalogError::Empty` if it holds no valid word.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let catalog = load_from_file("data/words.tsv").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let catalog = parse_catalog(&content);
    if catalog.is_empty() {
        return Err(CatalogError::Empty(path.display().to_string()));
    }

    tracing::info!(path = %path.display(), words = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse catalog text, skipping comments, blank lines, and invalid words
#[must_use]
pub fn parse_catalog(content: &str) -> Catalog {
    let words = content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let (text, hint) = trimmed.split_once('\t').unwrap_or((trimmed, ""));
            match Word::new(text, hint) {
                Ok(word) => Some(word),
                Err(err) => {
                    tracing::warn!(line = idx + 1, word = text, %err, "skipping catalog line");
                    None
                }
            }
        })
        .collect();

    Catalog::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_reads_words_and_hints() {
        let catalog = parse_catalog("ocean\tVast blue expanse\npuzzle\tBrain teaser\n");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.words()[0].text(), "ocean");
        assert_eq!(catalog.words()[0].hint(), "Vast blue expanse");
        assert_eq!(catalog.words()[1].hint(), "Brain teaser");
    }

    #[test]
    fn parse_skips_comments_blanks_and_invalid() {
        let content = "# animals\n\nkitten\tYoung domestic cat\nbad word\tSpaces\n  zephyr  \n";
        let catalog = parse_catalog(content);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.words()[0].text(), "kitten");
        assert_eq!(catalog.words()[1].text(), "zephyr");
        assert_eq!(catalog.words()[1].hint(), "");
    }

    #[test]
    fn parse_empty() {
        assert!(parse_catalog("").is_empty());
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "castle\tMedieval fortress").unwrap();
        writeln!(file, "wizard\tMagic practitioner").unwrap();

        let catalog = load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find("wizard").is_some());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.tsv"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn load_file_without_valid_words_is_empty_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        writeln!(file, "1234\tnumbers").unwrap();

        let result = load_from_file(file.path());
        assert!(matches!(result, Err(CatalogError::Empty(_))));
    }
}
