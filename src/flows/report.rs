//! Report flow - the direct word-frequency pipeline
//!
//! read words -> drop stop words -> count -> sort -> render the top entries

use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::core::config::Config;
use crate::core::frequency::FrequencyTable;
use crate::core::model::Report;
use crate::core::render::Renderer;
use crate::core::stop_words::StopWords;
use crate::core::words::{read_words, WordFilter};

/// Build the full report for `file`
pub fn build_report(
    file: &Path,
    stop_words: &StopWords,
    filter: WordFilter,
) -> crate::core::error::Result<Report> {
    let words = filter.apply(read_words(file)?, stop_words);
    let table: FrequencyTable = words.iter().collect();
    info!(
        file = %file.display(),
        words = table.total(),
        distinct = table.len(),
        "counted words"
    );
    Ok(Report::from_table(&table))
}

/// Run the report command
pub fn run_report(config: &Config, file: &Path, out: &mut dyn Write) -> Result<()> {
    let stop_words = StopWords::load(&config.stop_words)?;
    let report = build_report(file, &stop_words, WordFilter::default())?;

    Renderer::with_config(config.render).render_to(&report, out)?;
    Ok(())
}
