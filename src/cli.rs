//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::paths::DEFAULT_STOP_WORDS_PATH;
use crate::core::render::{OutputFormat, RenderConfig, DEFAULT_TOP};

/// termfreq - term frequency reports, a plugin-loading framework and a type introspector.
#[derive(Parser, Debug)]
#[command(name = "termfreq")]
#[command(
    author,
    version,
    about,
    long_about = r#"termfreq reads a text file, drops stop words, counts word frequencies and
prints the most frequent words as `word - count` lines.

The same count can be produced three ways:
- report: the direct pipeline
- framework: a plugin package loaded by path and driven through a fixed contract
- eleven: a controller that reaches its collaborators only through capability traits

Examples:
    termfreq report pride-and-prejudice.txt
    termfreq framework plugins/app1 pride-and-prejudice.txt
    echo StopWordManager | termfreq inspect
    termfreq --format json --top 10 report book.txt
"#
)]
pub struct Cli {
    /// Comma-separated stop-word list.
    #[arg(
        long,
        global = true,
        env = "TERMFREQ_STOP_WORDS",
        default_value = DEFAULT_STOP_WORDS_PATH,
        value_name = "PATH",
        long_help = "Comma-separated stop-word list. The 26 single letters are always added.\n\n\
Relative paths are resolved against the current directory. Plugins and the eleven\n\
controller read the same list."
    )]
    pub stop_words: PathBuf,

    /// Number of entries to print.
    #[arg(long, global = true, default_value_t = DEFAULT_TOP, value_name = "N")]
    pub top: usize,

    /// Output format (text/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for reports and type descriptions.\n\n\
Supported values:\n\
- text (default): `word - count` lines\n\
- json: a single JSON object with totals\n\
- jsonl: one JSON object per entry\n\n\
Plugin output is always whatever the plugin prints."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Disable colored output (when applicable).
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug diagnostics on stderr. TERMFREQ_LOG overrides this with a\n\
tracing filter such as `termfreq=trace`."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the most frequent words of a text file.
    #[command(long_about = "Read FILE, split it on every non-alphanumeric character, lowercase,\n\
drop stop words and print the most frequent words, highest count first.\n\n\
Example:\n\
  termfreq report pride-and-prejudice.txt\n")]
    Report {
        /// Input text file.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Load a plugin package and run it on a text file.
    #[command(
        long_about = r#"Resolve PACKAGE, locate its `App` type, construct it with FILE, ask it for
the filtered words, then hand them to its `print` capability.

PACKAGE is a JSON manifest ({"package": "app1"}), an existing file whose stem
names a registered package, or a bare package name (app1, app2). The entry type
is always `App`.

Examples:
    termfreq framework app1 book.txt
    termfreq framework plugins/app2.pkg book.txt   (the file must exist)
"#
    )]
    Framework {
        /// Plugin package path.
        #[arg(value_name = "PACKAGE")]
        package: PathBuf,

        /// Input text file.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Describe a registered type: fields, methods, superclasses, interfaces.
    #[command(long_about = "Read a type name from stdin (or --name) and print its declared fields,\n\
declared methods, superclass chain and implemented interfaces, one tagged line each.\n\n\
An unknown name is reported on stderr and is not an error.\n\n\
Examples:\n\
  echo WordFrequencyController | termfreq inspect\n\
  termfreq inspect --name StopWordManager\n\
  termfreq inspect --list\n")]
    Inspect {
        /// Type name (skips reading stdin).
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// List every registered type instead.
        #[arg(long)]
        list: bool,
    },

    /// Describe a type read from stdin, then count words through capability traits.
    Eleven {
        /// Input text file.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List the registered plugin packages.
    Packages,
}

impl Cli {
    /// Gather the global flags into a run configuration
    pub fn config(&self) -> Config {
        let format: OutputFormat = self.format.parse().unwrap_or_default();
        Config {
            stop_words: self.stop_words.clone(),
            render: RenderConfig::with_pretty(format, self.pretty).with_top(self.top),
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    config.publish();

    let stdout = io::stdout();

    match cli.command {
        Commands::Report { file } => {
            let mut out = stdout.lock();
            crate::flows::report::run_report(&config, &file, &mut out)?;
            out.flush()?;
        }

        Commands::Framework { package, file } => {
            let mut out = stdout.lock();
            crate::flows::framework::run_framework(&package, &file, &mut out)?;
            out.flush()?;
        }

        Commands::Inspect { name, list } => crate::flows::inspect::run_inspect(
            name.as_deref(),
            list,
            config.render,
            io::stdin().lock(),
            io::stdin().is_terminal(),
        )?,

        Commands::Eleven { file } => crate::flows::eleven::run_eleven(
            &config,
            &file,
            io::stdin().lock(),
            io::stdin().is_terminal(),
        )?,

        Commands::Packages => {
            let mut out = stdout.lock();
            crate::flows::framework::run_packages(config.render, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_defaults() {
        let cli = Cli::try_parse_from(["termfreq", "report", "book.txt"]).unwrap();
        let config = cli.config();
        assert_eq!(config.render.top, 25);
        assert_eq!(config.render.format, OutputFormat::Text);
        assert!(matches!(cli.command, Commands::Report { .. }));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "termfreq",
            "report",
            "book.txt",
            "--top",
            "3",
            "--format",
            "json",
            "--stop-words",
            "sw.txt",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.render.top, 3);
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.stop_words, PathBuf::from("sw.txt"));
    }

    #[test]
    fn test_framework_requires_two_arguments() {
        assert!(Cli::try_parse_from(["termfreq", "framework", "app1"]).is_err());
        assert!(Cli::try_parse_from(["termfreq", "framework", "app1", "book.txt"]).is_ok());
    }

    #[test]
    fn test_unknown_format_falls_back_to_text() {
        let cli = Cli::try_parse_from(["termfreq", "--format", "yaml", "packages"]).unwrap();
        assert_eq!(cli.config().render.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
