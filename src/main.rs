//! termfreq - term frequency reports three ways
//!
//! termfreq provides:
//! - A direct word-frequency report with stop-word filtering
//! - A framework that loads interchangeable application packages by path
//! - A controller that calls its collaborators only through capability traits
//! - A metadata-driven introspector for the application's own types

use clap::Parser;
use colored::Colorize;

mod cli;
mod core;
mod flows;
mod plugins;
mod reflect;

fn main() {
    let cli = cli::Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    crate::core::logging::init_tracing(cli.verbose, cli.quiet);

    if let Err(err) = cli::run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
