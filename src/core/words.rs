//! Word source - turns a text file into lowercase tokens
//!
//! A token is a maximal run of ASCII letters and digits. Everything else,
//! underscore included, separates tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

use crate::core::error::Result;
use crate::core::file_reader::{read_text, EncodingStrategy};
use crate::core::stop_words::StopWords;

pub static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("Invalid WORD_RE regex"));

/// Split text into lowercase tokens, in order of appearance
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Read a file and tokenize it
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path, EncodingStrategy::Lossy)?;
    Ok(tokenize(&text))
}

/// Token filter applied after tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFilter {
    /// Tokens shorter than this are dropped
    pub min_len: usize,
}

impl Default for WordFilter {
    fn default() -> Self {
        Self { min_len: 1 }
    }
}

impl WordFilter {
    /// Drop single-character tokens as well as stop words
    pub fn skip_single_chars() -> Self {
        Self { min_len: 2 }
    }

    pub fn keep(&self, word: &str, stop_words: &StopWords) -> bool {
        word.len() >= self.min_len && !stop_words.contains(word)
    }

    /// Keep only the tokens that pass the filter, preserving order
    pub fn apply(&self, words: Vec<String>, stop_words: &StopWords) -> Vec<String> {
        words
            .into_iter()
            .filter(|w| self.keep(w, stop_words))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count maximal runs of word characters without the regex
    fn count_runs(text: &str) -> usize {
        let mut runs = 0;
        let mut in_word = false;
        for c in text.chars() {
            let word_char = c.is_ascii_alphanumeric();
            if word_char && !in_word {
                runs += 1;
            }
            in_word = word_char;
        }
        runs
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(
            tokenize("The cat sat. THE CAT RAN."),
            vec!["the", "cat", "sat", "the", "cat", "ran"]
        );
    }

    #[test]
    fn test_tokenize_underscore_is_separator() {
        assert_eq!(tokenize("snake_case_word"), vec!["snake", "case", "word"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("chapter 12, page3"), vec!["chapter", "12", "page3"]);
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_tokenize_empty_and_separators_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  --- ,,, __ ").is_empty());
    }

    #[test]
    fn test_token_count_matches_word_runs() {
        let samples = [
            "",
            "one",
            "  leading and trailing  ",
            "a_b-c.d!e",
            "It's a truth universally acknowledged...\nthat a single man",
            "über 42 ça_va\t\tmerci",
        ];
        for text in samples {
            assert_eq!(tokenize(text).len(), count_runs(text), "text: {text:?}");
        }
    }

    #[test]
    fn test_filter_min_len() {
        let stop = StopWords::from_list(&[]);
        let words = tokenize("I am a big cat");
        let kept = WordFilter::skip_single_chars().apply(words, &stop);
        assert_eq!(kept, vec!["am", "big", "cat"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let stop = StopWords::from_list(&["the", "and"]);
        let filter = WordFilter::default();
        let words = tokenize("the cat and the hat and a bat");
        let once = filter.apply(words, &stop);
        let twice = filter.apply(once.clone(), &stop);
        assert_eq!(once, twice);
        assert_eq!(once, vec!["cat", "hat", "bat"]);
    }

    #[test]
    fn test_read_words_from_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("input.txt");
        std::fs::write(&path, "Hello, World!\nhello again").unwrap();

        let words = read_words(&path).unwrap();
        assert_eq!(words, vec!["hello", "world", "hello", "again"]);
    }
}
