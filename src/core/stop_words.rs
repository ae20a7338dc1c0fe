//! Stop-word set
//!
//! Loaded once per run from a comma-separated list and never mutated
//! afterwards. The 26 single ASCII letters are always members.

use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::core::error::Result;
use crate::core::file_reader::{read_text, EncodingStrategy};

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load a comma-separated stop-word file
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_text(path, EncodingStrategy::Lossy)?;
        let stop_words = Self::parse(&text);
        debug!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        Ok(stop_words)
    }

    /// Parse comma-separated content
    pub fn parse(text: &str) -> Self {
        Self::from_iter_with_letters(text.split(',').map(str::trim))
    }

    #[cfg(test)]
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_iter_with_letters(words.iter().copied())
    }

    fn from_iter_with_letters<'a>(words: impl Iterator<Item = &'a str>) -> Self {
        let mut set: HashSet<String> = words
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();
        set.extend(('a'..='z').map(String::from));
        Self { words: set }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
