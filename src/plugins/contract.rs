//! Plugin contract
//!
//! A package exports types by name. The loader only ever sees the
//! type-erased [`TypeExport`] view: a constructor, a `words` capability on
//! the instance and a type-level `print` capability. Any of them may be
//! absent, and the loader has to check.

use std::any::{type_name, Any};
use std::io::Write;
use std::path::Path;

use crate::core::error::{PluginContractError, Result};
use crate::core::frequency::FrequencyTable;
use crate::core::model::Report;
use crate::core::render::{write_top, DEFAULT_TOP};

/// Name of the type every package must export
pub const ENTRY_TYPE: &str = "App";

/// What an application implementation provides
pub trait App: Any {
    /// Bind the application to an input file
    fn new(path: &Path) -> Self
    where
        Self: Sized;

    /// Tokenized, filtered words of the input file
    fn words(&self) -> Result<Vec<String>>;

    /// Render the report for `words`
    fn print(words: &[String], out: &mut dyn Write) -> Result<()>
    where
        Self: Sized;
}

/// A constructed plugin instance
pub type Instance = Box<dyn Any>;

pub type WordsFn = fn(&dyn Any) -> Result<Vec<String>>;
pub type PrintFn = fn(&[String], &mut dyn Write) -> Result<()>;

/// Constructor taking the input file path
pub type ConstructorFn = fn(&Path) -> Instance;

/// One exported type and the capabilities it offers
#[derive(Clone)]
pub struct TypeExport {
    pub name: &'static str,
    /// `None` when the type has no constructor taking a path
    pub constructor: Option<ConstructorFn>,
    pub words: Option<WordsFn>,
    pub print: Option<PrintFn>,
}

impl TypeExport {
    /// Export `A` under `name` with its full contract
    pub fn app<A: App>(name: &'static str) -> Self {
        Self {
            name,
            constructor: Some(construct::<A>),
            words: Some(words_of::<A>),
            print: Some(A::print),
        }
    }
}

impl std::fmt::Debug for TypeExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeExport")
            .field("name", &self.name)
            .field("constructor", &self.constructor.is_some())
            .field("words", &self.words.is_some())
            .field("print", &self.print.is_some())
            .finish()
    }
}

fn construct<A: App>(path: &Path) -> Instance {
    Box::new(A::new(path))
}

fn words_of<A: App>(instance: &dyn Any) -> Result<Vec<String>> {
    match instance.downcast_ref::<A>() {
        Some(app) => app.words(),
        None => Err(PluginContractError::MissingMethod {
            type_name: type_name::<A>().to_string(),
            method: "words",
        }
        .into()),
    }
}

/// The report both bundled applications print: a word total, then the
/// most frequent words
pub fn print_word_report(words: &[String], out: &mut dyn Write) -> Result<()> {
    let table: FrequencyTable = words.iter().collect();
    let report = Report::from_table(&table);
    writeln!(out, "words: {}", words.len())?;
    write_top(&report.entries, DEFAULT_TOP, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::TermFreqError;

    struct Fixed {
        words: Vec<String>,
    }

    impl App for Fixed {
        fn new(path: &Path) -> Self {
            Self {
                words: vec![path.display().to_string()],
            }
        }

        fn words(&self) -> Result<Vec<String>> {
            Ok(self.words.clone())
        }

        fn print(words: &[String], out: &mut dyn Write) -> Result<()> {
            writeln!(out, "{}", words.join(","))?;
            Ok(())
        }
    }

    struct Other;

    #[test]
    fn test_export_round_trips_through_erasure() {
        let export = TypeExport::app::<Fixed>("App");
        let instance = (export.constructor.unwrap())(Path::new("input.txt"));
        let words = (export.words.unwrap())(instance.as_ref()).unwrap();
        assert_eq!(words, vec!["input.txt"]);

        let mut out = Vec::new();
        (export.print.unwrap())(&words, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "input.txt\n");
    }

    #[test]
    fn test_words_on_foreign_instance_fails() {
        let export = TypeExport::app::<Fixed>("App");
        let foreign: Instance = Box::new(Other);
        let err = (export.words.unwrap())(foreign.as_ref()).unwrap_err();
        assert!(matches!(err, TermFreqError::PluginContract(_)));
    }

    #[test]
    fn test_print_word_report() {
        let words: Vec<String> = ["cat", "sat", "cat"].iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        print_word_report(&words, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "words: 3\ncat - 2\nsat - 1\n"
        );
    }

    #[test]
    fn test_debug_shows_capabilities() {
        let mut export = TypeExport::app::<Fixed>("App");
        export.print = None;
        let text = format!("{:?}", export);
        assert!(text.contains("print: false"));
        assert!(text.contains("words: true"));
    }
}
