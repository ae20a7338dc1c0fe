//! Inspect flow - describe a registered type by name

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::core::error::{Result, TermFreqError};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::reflect::printer::{introspect, write_report};
use crate::reflect::TypeRegistry;

const PROMPT: &str = "type name:> ";

/// Read one line naming a type, writing the prompt to `prompt` first if given
pub fn prompt_type_name<R: BufRead>(
    mut input: R,
    prompt: Option<&mut dyn Write>,
) -> io::Result<String> {
    if let Some(out) = prompt {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Print the report for `name`, or fail with `TypeNotFound` having printed nothing
pub fn report_type(
    registry: &TypeRegistry,
    name: &str,
    config: RenderConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let report = introspect(registry, name)?;
    debug!(name = %report.path, "introspected type");
    write_report(&report, config, out)
}

/// Names of every registered type, one per line
pub fn write_type_list(
    registry: &TypeRegistry,
    config: RenderConfig,
    out: &mut dyn Write,
) -> Result<()> {
    match config.format {
        OutputFormat::Text => {
            for info in registry.iter() {
                writeln!(out, "{}", info.path)?;
            }
        }
        OutputFormat::Json | OutputFormat::Jsonl => {
            let paths: Vec<_> = registry.iter().map(|info| info.path).collect();
            let json = serde_json::to_string(&paths).map_err(io::Error::from)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

/// Run the inspect command
///
/// A missing type is reported on stderr; it is not a failure of the command.
///
/// `interactive` says whether a person is typing on `input`; only then is the
/// prompt shown, on stderr.
pub fn run_inspect<R: BufRead>(
    name: Option<&str>,
    list: bool,
    config: RenderConfig,
    input: R,
    interactive: bool,
) -> anyhow::Result<()> {
    let registry = TypeRegistry::builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if list {
        write_type_list(&registry, config, &mut out)?;
        return Ok(());
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let mut stderr = io::stderr();
            prompt_type_name(input, interactive.then_some(&mut stderr as &mut dyn Write))?
        }
    };

    match report_type(&registry, &name, config, &mut out) {
        Ok(()) => Ok(()),
        Err(TermFreqError::TypeNotFound(missing)) => {
            eprintln!("Type {} not found.", missing);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
