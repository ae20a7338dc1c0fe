//! Plugin loader (the framework)
//!
//! Drives one package through `Idle -> Loaded -> Constructed ->
//! WordsRetrieved -> Printed -> Done`. The whole contract is resolved while
//! loading, so a broken package fails before it can print anything.

use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::error::{PluginContractError, Result, TermFreqError};
use crate::core::file_reader::{read_text, EncodingStrategy};
use crate::core::paths::{normalize_path, package_name};
use crate::plugins::contract::{ConstructorFn, PrintFn, WordsFn, ENTRY_TYPE};
use crate::plugins::registry::PluginRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Idle,
    Loaded,
    Constructed,
    WordsRetrieved,
    Printed,
    Done,
}

impl fmt::Display for LoaderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoaderState::Idle => "idle",
            LoaderState::Loaded => "loaded",
            LoaderState::Constructed => "constructed",
            LoaderState::WordsRetrieved => "words-retrieved",
            LoaderState::Printed => "printed",
            LoaderState::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// On-disk description of a package: `{"package": "app1"}`
///
/// A manifest only names the package. The entry type is always `App`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    pub package: String,
}

/// A package whose contract has been fully resolved
#[derive(Clone, Copy)]
pub struct ResolvedApp<'r> {
    pub package: &'r str,
    pub type_name: &'static str,
    constructor: ConstructorFn,
    words: WordsFn,
    print: PrintFn,
}

impl fmt::Debug for ResolvedApp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedApp")
            .field("package", &self.package)
            .field("type_name", &self.type_name)
            .finish()
    }
}

pub struct Framework<'r> {
    registry: &'r PluginRegistry,
    state: LoaderState,
}

impl<'r> Framework<'r> {
    pub fn new(registry: &'r PluginRegistry) -> Self {
        Self {
            registry,
            state: LoaderState::Idle,
        }
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    fn transition(&mut self, next: LoaderState) {
        debug!(from = %self.state, to = %next, "loader transition");
        self.state = next;
    }

    /// Load the package at `package_path`, run it on `file_path`, and let it
    /// print into `out`
    pub fn run(&mut self, package_path: &Path, file_path: &Path, out: &mut dyn Write) -> Result<()> {
        let app = self.load(package_path)?;
        self.transition(LoaderState::Loaded);

        let instance = (app.constructor)(file_path);
        self.transition(LoaderState::Constructed);

        let words = (app.words)(instance.as_ref())
            .map_err(|e| TermFreqError::invocation("words", e))?;
        info!(package = app.package, words = words.len(), "retrieved words");
        self.transition(LoaderState::WordsRetrieved);

        (app.print)(&words, out).map_err(|e| TermFreqError::invocation("print", e))?;
        self.transition(LoaderState::Printed);

        drop(instance);
        self.transition(LoaderState::Done);
        Ok(())
    }

    /// Resolve a package path and check its contract
    pub fn load(&self, package_path: &Path) -> Result<ResolvedApp<'r>> {
        let name = locate(package_path)?;
        debug!(path = %normalize_path(package_path), package = %name, "resolving package");

        let package =
            self.registry
                .get(&name)
                .ok_or_else(|| PluginContractError::PackageNotFound {
                    path: package_path.to_path_buf(),
                    name: name.clone(),
                })?;

        let export =
            package
                .export(ENTRY_TYPE)
                .ok_or_else(|| PluginContractError::TypeMissing {
                    package: package.name.clone(),
                    type_name: ENTRY_TYPE.to_string(),
                })?;

        let constructor =
            export
                .constructor
                .ok_or_else(|| PluginContractError::ConstructorMismatch {
                    type_name: export.name.to_string(),
                })?;
        let words = export.words.ok_or_else(|| missing(export.name, "words"))?;
        let print = export.print.ok_or_else(|| missing(export.name, "print"))?;

        info!(package = %package.name, "loaded plugin package");
        Ok(ResolvedApp {
            package: &package.name,
            type_name: export.name,
            constructor,
            words,
            print,
        })
    }
}

fn missing(type_name: &str, method: &'static str) -> PluginContractError {
    PluginContractError::MissingMethod {
        type_name: type_name.to_string(),
        method,
    }
}

/// Package name for a path
///
/// An existing `.json` file is read as a manifest. Any other existing file,
/// or a bare name such as `app1`, names the package by its file stem. A
/// path with directory parts that does not exist is not a package.
fn locate(package_path: &Path) -> Result<String> {
    let not_found = |name: String| PluginContractError::PackageNotFound {
        path: package_path.to_path_buf(),
        name,
    };
    let stem = package_name(package_path).ok_or_else(|| not_found(String::new()))?;

    if package_path.is_file() {
        let is_manifest = package_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_manifest {
            return Ok(read_manifest(package_path)?.package);
        }
        return Ok(stem);
    }

    if package_path.components().count() == 1 {
        Ok(stem)
    } else {
        Err(not_found(stem).into())
    }
}

pub fn read_manifest(path: &Path) -> Result<PackageManifest> {
    let text = read_text(path, EncodingStrategy::Strict)?;
    serde_json::from_str(&text).map_err(|source| {
        PluginContractError::InvalidManifest {
            path: PathBuf::from(path),
            source,
        }
        .into()
    })
}
