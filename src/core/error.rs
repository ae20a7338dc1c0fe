//! Error kinds shared by every command
//!
//! `TypeNotFound` is the only non-fatal kind: the introspector reports it and
//! the run carries on. Everything else aborts the current run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for word counting, plugin loading and introspection
#[derive(Debug, Error)]
pub enum TermFreqError {
    /// A data or stop-word file could not be opened or read
    #[error("cannot access file `{}`: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A plugin package did not satisfy the loader contract
    #[error(transparent)]
    PluginContract(#[from] PluginContractError),

    /// The introspector was asked for a type nobody registered
    #[error("type `{0}` not found")]
    TypeNotFound(String),

    /// A resolved capability failed while it was running
    #[error("invocation of `{method}` failed")]
    Invocation {
        method: &'static str,
        #[source]
        source: Box<TermFreqError>,
    },

    /// Writing a report to the output stream failed
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl TermFreqError {
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TermFreqError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error raised inside a dynamically resolved capability
    pub fn invocation(method: &'static str, source: TermFreqError) -> Self {
        TermFreqError::Invocation {
            method,
            source: Box::new(source),
        }
    }
}

/// One variant per loader transition that can fail
#[derive(Debug, Error)]
pub enum PluginContractError {
    #[error("plugin package `{name}` not found (resolved from `{}`)", path.display())]
    PackageNotFound { path: PathBuf, name: String },

    #[error("invalid package manifest `{}`: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package `{package}` does not export a type named `{type_name}`")]
    TypeMissing { package: String, type_name: String },

    #[error("type `{type_name}` has no constructor taking a file path")]
    ConstructorMismatch { type_name: String },

    #[error("type `{type_name}` is missing the `{method}` capability")]
    MissingMethod {
        type_name: String,
        method: &'static str,
    },
}

pub type Result<T, E = TermFreqError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_file_access_message_includes_path() {
        let err = TermFreqError::file_access(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_invocation_keeps_source() {
        let inner = TermFreqError::file_access(
            "data.txt",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let err = TermFreqError::invocation("words", inner);
        assert_eq!(err.to_string(), "invocation of `words` failed");
        let source = err.source().expect("source present");
        assert!(source.to_string().contains("data.txt"));
    }

    #[test]
    fn test_contract_error_is_transparent() {
        let err: TermFreqError = PluginContractError::MissingMethod {
            type_name: "App".to_string(),
            method: "print",
        }
        .into();
        assert_eq!(
            err.to_string(),
            "type `App` is missing the `print` capability"
        );
        assert!(matches!(err, TermFreqError::PluginContract(_)));
    }
}
