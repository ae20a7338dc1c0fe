//! Run configuration
//!
//! Built once from the command line. The stop-word location is also
//! published as process-wide host state: plugins and the dispatcher's
//! stop-word manager take no configuration argument, so they read it here.

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

use crate::core::paths::DEFAULT_STOP_WORDS_PATH;
use crate::core::render::RenderConfig;

static STOP_WORDS_PATH: OnceCell<PathBuf> = OnceCell::new();

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Comma-separated stop-word list
    pub stop_words: PathBuf,

    /// How reports are rendered
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Make this config's stop-word path visible to code that cannot take a
    /// config argument. Only the first call in a process has any effect.
    pub fn publish(&self) {
        if STOP_WORDS_PATH.set(self.stop_words.clone()).is_err() {
            tracing::debug!("stop-word path already published");
        }
    }
}

/// The published stop-word path, or the default relative location
pub fn stop_words_path() -> &'static Path {
    STOP_WORDS_PATH
        .get()
        .map(PathBuf::as_path)
        .unwrap_or_else(|| Path::new(DEFAULT_STOP_WORDS_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.stop_words, PathBuf::from("../stop_words.txt"));
        assert_eq!(config.render.top, 25);
    }

    #[test]
    fn test_stop_words_path_falls_back_to_default() {
        // Unit tests never publish, so the default is always visible here
        assert_eq!(stop_words_path(), Path::new(DEFAULT_STOP_WORDS_PATH));
    }
}
