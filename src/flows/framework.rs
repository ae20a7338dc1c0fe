//! Framework flow - load a plugin package and let it report

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::plugins::contract::ENTRY_TYPE;
use crate::plugins::loader::Framework;
use crate::plugins::registry::PluginRegistry;

/// Run the framework command
pub fn run_framework(package: &Path, file: &Path, out: &mut dyn Write) -> Result<()> {
    let registry = PluginRegistry::builtin();
    let mut framework = Framework::new(&registry);
    let result = framework.run(package, file, out);
    debug!(package = %package.display(), state = %framework.state(), "framework stopped");
    result?;
    Ok(())
}

/// Run the packages command
pub fn run_packages(config: RenderConfig, out: &mut dyn Write) -> Result<()> {
    let registry = PluginRegistry::builtin();
    match config.format {
        OutputFormat::Text => {
            for package in registry.iter() {
                writeln!(out, "{} - {}", package.name, package.description)?;
            }
        }
        OutputFormat::Json | OutputFormat::Jsonl => {
            for package in registry.iter() {
                let value = serde_json::json!({
                    "name": package.name,
                    "description": package.description,
                    "exports_entry": package.export(ENTRY_TYPE).is_some(),
                });
                writeln!(out, "{}", value)?;
            }
        }
    }
    Ok(())
}
