//! Word catalogs for Hangman
//!
//! Provides the embedded (word, hint) catalog and an owned [`Catalog`] that
//! rounds draw their secret word from.

mod embedded;
pub mod loader;

pub use embedded::{CATALOG, CATALOG_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

/// Errors raised while building a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {0} contains no valid words")]
    Empty(String),
}

/// An owned list of playable words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    /// Catalog from already validated words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The built-in catalog
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::{CATALOG_COUNT, Catalog};
    ///
    /// let catalog = Catalog::embedded();
    /// assert_eq!(catalog.len(), CATALOG_COUNT);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(CATALOG)
    }

    /// Convert (word, hint) pairs, skipping invalid words
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let words = pairs
            .iter()
            .filter_map(|&(text, hint)| match Word::new(text, hint) {
                Ok(word) => Some(word),
                Err(err) => {
                    tracing::warn!(word = text, %err, "skipping catalog entry");
                    None
                }
            })
            .collect();
        Self { words }
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` for an empty catalog.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its text (case-insensitive)
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim();
        self.words
            .iter()
            .find(|word| word.text().eq_ignore_ascii_case(text))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
