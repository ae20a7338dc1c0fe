//! Dispatcher variant of the word count
//!
//! The controller never names its collaborators' concrete types: it holds
//! them as capability trait objects and calls through those. The
//! collaborators carry type metadata so the introspector can describe them.

use std::fmt::Debug;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::core::config::{stop_words_path, Config};
use crate::core::error::{Result, TermFreqError};
use crate::core::frequency::FrequencyTable;
use crate::core::model::FrequencyEntry;
use crate::core::render::write_top;
use crate::core::stop_words::StopWords;
use crate::core::words::read_words;
use crate::flows::inspect::{prompt_type_name, report_type};
use crate::reflect::{reflect_impl, reflect_struct, TypeRegistry};

/// Supplies the words of the input
pub trait WordStorage: Debug {
    fn words(&self) -> &[String];
}

/// Decides whether a word is dropped
pub trait StopWordCheck: Debug {
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Accumulates and sorts word counts
pub trait WordCounter: Debug {
    fn increment_count(&mut self, word: &str);
    fn sorted(&self) -> Vec<FrequencyEntry>;
}

reflect_struct! {
    /// Base of the controller
    #[derive(Debug, Default)]
    pub struct Parent {}
}

reflect_impl! {
    impl Parent {}
}

reflect_struct! {
    #[derive(Debug)]
    pub struct WordFrequencyController extends Parent via parent implements [Debug] {
        parent: Parent,
        storage_manager: Box<dyn WordStorage>,
        stop_word_manager: Box<dyn StopWordCheck>,
        word_freq_manager: Box<dyn WordCounter>,
    }
}

reflect_impl! {
    impl WordFrequencyController {
        /// Wire up the default collaborators for `path`
        pub fn new(path: &Path) -> Result<Self> {
            Ok(Self::with_collaborators(
                Box::new(DataStorageManager::new(path)?),
                Box::new(StopWordManager::new()?),
                Box::new(WordFrequencyManager::new()),
            ))
        }

        pub fn with_collaborators(
            storage_manager: Box<dyn WordStorage>,
            stop_word_manager: Box<dyn StopWordCheck>,
            word_freq_manager: Box<dyn WordCounter>,
        ) -> Self {
            Self {
                parent: Parent::default(),
                storage_manager,
                stop_word_manager,
                word_freq_manager,
            }
        }

        /// Count the stored words and print the `top` most frequent
        pub fn run(&mut self, top: usize, out: &mut dyn Write) -> Result<()> {
            for word in self.storage_manager.words() {
                if !self.stop_word_manager.is_stop_word(word) {
                    self.word_freq_manager.increment_count(word);
                }
            }

            let sorted = self.word_freq_manager.sorted();
            debug!(distinct = sorted.len(), "sorted word frequencies");
            write_top(&sorted, top, out)?;
            Ok(())
        }
    }
}

reflect_struct! {
    /// Models the contents of the file
    #[derive(Debug, Clone)]
    pub struct DataStorageManager implements [WordStorage, Debug] {
        words: Vec<String>,
    }
}

reflect_impl! {
    impl DataStorageManager {
        pub fn new(path: &Path) -> Result<Self> {
            let words = read_words(path)?;
            Ok(Self { words })
        }
    }

    impl WordStorage for DataStorageManager {
        fn words(&self) -> &[String] {
            &self.words
        }
    }
}

reflect_struct! {
    /// Models the stop word filter
    #[derive(Debug, Clone)]
    pub struct StopWordManager implements [StopWordCheck, Debug] {
        stop_words: StopWords,
    }
}

reflect_impl! {
    impl StopWordManager {
        /// Load from the published stop-word location
        pub fn new() -> Result<Self> {
            Self::from_path(stop_words_path())
        }

        pub fn from_path(path: &Path) -> Result<Self> {
            Ok(Self {
                stop_words: StopWords::load(path)?,
            })
        }
    }

    impl StopWordCheck for StopWordManager {
        fn is_stop_word(&self, word: &str) -> bool {
            self.stop_words.contains(word)
        }
    }
}

reflect_struct! {
    /// Keeps the word frequency data
    #[derive(Debug, Clone, Default)]
    pub struct WordFrequencyManager implements [WordCounter, Debug] {
        word_freqs: FrequencyTable,
    }
}

reflect_impl! {
    impl WordFrequencyManager {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl WordCounter for WordFrequencyManager {
        fn increment_count(&mut self, word: &str) {
            self.word_freqs.increment(word);
        }

        fn sorted(&self) -> Vec<FrequencyEntry> {
            self.word_freqs.sorted_descending()
        }
    }
}

/// Prompt for a type name and describe it, then run the controller on `file`
///
/// An unknown type name is reported on stderr and does not stop the count.
pub fn run_eleven<R: BufRead>(
    config: &Config,
    file: &Path,
    input: R,
    interactive: bool,
) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut stderr = std::io::stderr();
    let name = prompt_type_name(input, interactive.then_some(&mut stderr as &mut dyn Write))?;
    let registry = TypeRegistry::builtin();
    match report_type(&registry, &name, config.render, &mut out) {
        Ok(()) => {}
        Err(TermFreqError::TypeNotFound(missing)) => {
            debug!(name = %missing, "type not registered");
            eprintln!("Type {} not found.", missing);
        }
        Err(e) => return Err(e.into()),
    }

    info!(file = %file.display(), "running word frequency controller");
    let mut controller = WordFrequencyController::new(file)?;
    controller.run(config.render.top, &mut out)?;
    Ok(())
}
