//! `app2` package: streams the file through a buffered scanner
//!
//! Tokens are emitted as soon as a delimiter byte ends them, without holding
//! the whole file in memory. Any byte outside `[A-Za-z0-9]` is a delimiter,
//! which yields the same tokens as `core::words::tokenize` on a lossy decode.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::config::stop_words_path;
use crate::core::error::{Result, TermFreqError};
use crate::core::stop_words::StopWords;
use crate::core::words::WordFilter;
use crate::plugins::contract::{print_word_report, App, TypeExport, ENTRY_TYPE};
use crate::plugins::registry::PluginPackage;
use crate::reflect::{reflect_impl, reflect_struct};

reflect_struct! {
    #[derive(Debug, Clone)]
    pub struct App2 implements [App] {
        filename: PathBuf,
        stop_words: PathBuf,
    }
}

reflect_impl! {
    impl App2 {
        /// Bind to `path` with an explicit stop-word list
        pub fn with_stop_words(path: &Path, stop_words: impl Into<PathBuf>) -> Self {
            Self {
                filename: path.to_path_buf(),
                stop_words: stop_words.into(),
            }
        }

        /// Feed every kept token to `sink` while scanning
        fn scan(&self, mut sink: impl FnMut(String)) -> Result<()> {
            let file = File::open(&self.filename)
                .map_err(|e| TermFreqError::file_access(&self.filename, e))?;
            let mut reader = BufReader::new(file);
            let mut token = String::new();

            loop {
                let chunk = reader
                    .fill_buf()
                    .map_err(|e| TermFreqError::file_access(&self.filename, e))?;
                if chunk.is_empty() {
                    break;
                }
                for &byte in chunk {
                    if byte.is_ascii_alphanumeric() {
                        token.push(byte.to_ascii_lowercase() as char);
                    } else if !token.is_empty() {
                        sink(std::mem::take(&mut token));
                    }
                }
                let consumed = chunk.len();
                reader.consume(consumed);
            }

            if !token.is_empty() {
                sink(token);
            }
            Ok(())
        }
    }

    impl App for App2 {
        fn new(path: &Path) -> Self {
            Self::with_stop_words(path, stop_words_path())
        }

        fn words(&self) -> Result<Vec<String>> {
            let stop_words = StopWords::load(&self.stop_words)?;
            let filter = WordFilter::skip_single_chars();
            let mut words = Vec::new();
            self.scan(|token| {
                if filter.keep(&token, &stop_words) {
                    words.push(token);
                }
            })?;
            debug!(words = words.len(), "app2 filtered words");
            Ok(words)
        }

        fn print(words: &[String], out: &mut dyn Write) -> Result<()> {
            print_word_report(words, out)
        }
    }
}

pub fn package() -> PluginPackage {
    PluginPackage::new("app2", "streaming, scanner-style tokenization")
        .with_export(TypeExport::app::<App2>(ENTRY_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::app1::App1;
    use std::fs;
    use tempfile::tempdir;

    fn fixture(dir: &Path, text: &[u8]) -> (PathBuf, PathBuf) {
        let stop = dir.join("stop_words.txt");
        fs::write(&stop, "the,and,of\n").unwrap();
        let input = dir.join("input.txt");
        fs::write(&input, text).unwrap();
        (input, stop)
    }

    #[test]
    fn test_scan_emits_trailing_token() {
        let temp = tempdir().unwrap();
        let (input, stop) = fixture(temp.path(), b"Pride and Prejudice");
        let app = App2::with_stop_words(&input, &stop);
        assert_eq!(app.words().unwrap(), vec!["pride", "prejudice"]);
    }

    #[test]
    fn test_matches_app1_on_awkward_input() {
        let temp = tempdir().unwrap();
        let mut text = b"It is a truth_universally acknowledged,\r\nthat a single man".to_vec();
        text.extend_from_slice(&[0xff, b'x', b'y', b' ']);
        text.extend_from_slice("caf\u{e9} of 42nd street".as_bytes());
        let (input, stop) = fixture(temp.path(), &text);

        let app1 = App1::with_stop_words(&input, &stop).words().unwrap();
        let app2 = App2::with_stop_words(&input, &stop).words().unwrap();
        assert_eq!(app1, app2);
        assert!(app2.contains(&"xy".to_string()));
    }

    #[test]
    fn test_print_matches_app1() {
        let words: Vec<String> = ["elizabeth", "darcy", "elizabeth"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut one = Vec::new();
        let mut two = Vec::new();
        App1::print(&words, &mut one).unwrap();
        App2::print(&words, &mut two).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn test_missing_input_is_file_access_error() {
        let temp = tempdir().unwrap();
        let (_, stop) = fixture(temp.path(), b"");
        let app = App2::with_stop_words(&temp.path().join("absent.txt"), &stop);
        assert!(matches!(
            app.words().unwrap_err(),
            TermFreqError::FileAccess { .. }
        ));
    }
}
