//! `app1` package: reads the whole file, then tokenizes it line by line

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::stop_words_path;
use crate::core::error::Result;
use crate::core::file_reader::{read_text, EncodingStrategy};
use crate::core::stop_words::StopWords;
use crate::core::words::{tokenize, WordFilter};
use crate::plugins::contract::{print_word_report, App, TypeExport, ENTRY_TYPE};
use crate::plugins::registry::PluginPackage;
use crate::reflect::{reflect_impl, reflect_struct};

reflect_struct! {
    #[derive(Debug, Clone)]
    pub struct App1 implements [App] {
        filename: PathBuf,
        stop_words: PathBuf,
    }
}

reflect_impl! {
    impl App1 {
        /// Bind to `path` with an explicit stop-word list
        pub fn with_stop_words(path: &Path, stop_words: impl Into<PathBuf>) -> Self {
            Self {
                filename: path.to_path_buf(),
                stop_words: stop_words.into(),
            }
        }

        fn read_tokens(&self) -> Result<Vec<String>> {
            let text = read_text(&self.filename, EncodingStrategy::Lossy)?;
            Ok(text.lines().flat_map(tokenize).collect())
        }
    }

    impl App for App1 {
        fn new(path: &Path) -> Self {
            Self::with_stop_words(path, stop_words_path())
        }

        fn words(&self) -> Result<Vec<String>> {
            let stop_words = StopWords::load(&self.stop_words)?;
            let words = WordFilter::skip_single_chars().apply(self.read_tokens()?, &stop_words);
            debug!(words = words.len(), "app1 filtered words");
            Ok(words)
        }

        fn print(words: &[String], out: &mut dyn Write) -> Result<()> {
            print_word_report(words, out)
        }
    }
}

pub fn package() -> PluginPackage {
    PluginPackage::new("app1", "whole-file read, line-split tokenization")
        .with_export(TypeExport::app::<App1>(ENTRY_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_words_filters_stop_words_and_single_chars() {
        let temp = tempdir().unwrap();
        let stop = temp.path().join("stop_words.txt");
        fs::write(&stop, "the,and\n").unwrap();
        let input = temp.path().join("input.txt");
        fs::write(&input, "The cat and I\nsat on 1 mat_x").unwrap();

        let app = App1::with_stop_words(&input, &stop);
        assert_eq!(app.words().unwrap(), vec!["cat", "sat", "on", "mat"]);
    }

    #[test]
    fn test_words_missing_stop_words_fails() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("input.txt");
        fs::write(&input, "hello").unwrap();

        let app = App1::with_stop_words(&input, temp.path().join("absent.txt"));
        assert!(app.words().is_err());
    }

    #[test]
    fn test_new_uses_published_stop_words_path() {
        let app = App1::new(Path::new("book.txt"));
        assert_eq!(app.stop_words, stop_words_path());
        assert_eq!(app.filename, PathBuf::from("book.txt"));
    }
}
