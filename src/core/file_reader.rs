//! Whole-file reading with a configurable encoding strategy
//!
//! Every read opens the file, drains it and drops the handle before
//! returning, on success and on error alike.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::error::{Result, TermFreqError};

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Reject files that are not valid UTF-8
    Strict,
    /// Replace invalid sequences with U+FFFD
    #[default]
    Lossy,
}

/// Read the full contents of `path` as text
pub fn read_text(path: &Path, strategy: EncodingStrategy) -> Result<String> {
    let bytes = read_bytes(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read file");

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => match strategy {
            EncodingStrategy::Lossy => {
                warn!(path = %path.display(), "file is not valid UTF-8, decoding lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
            EncodingStrategy::Strict => Err(TermFreqError::file_access(
                path,
                io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()),
            )),
        },
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| TermFreqError::file_access(path, e))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| TermFreqError::file_access(path, e))?;
    Ok(buffer)
}
