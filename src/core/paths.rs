//! Path helpers
//!
//! All displayed paths use '/' as separator.

use std::path::Path;

/// Stop-word list location, relative to the working directory
pub const DEFAULT_STOP_WORDS_PATH: &str = "../stop_words.txt";

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Package name a plugin path refers to: its file stem
///
/// `plugins/app2.pkg` and `app2` both name the `app2` package.
pub fn package_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.trim().to_lowercase())
        .filter(|stem| !stem.is_empty())
}
