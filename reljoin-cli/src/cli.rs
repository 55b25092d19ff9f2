//! Contains structures and functionality for the binary

use std::path::PathBuf;

use reljoin::operations::DANGLING_PLACEHOLDER;

/// Relational operation to evaluate over the two tables.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
    /// Every pairing of a left-table row with a right-table row.
    Cartesian,
    /// Row pairs agreeing on every attribute the two headers share.
    Natural,
    /// Natural join, plus a placeholder row per unmatched left row.
    Outer,
}

/// Cli arguments related to logging
#[derive(clap::Args, Debug)]
pub(crate) struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::builder::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(long = "log", value_parser=clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]), group = "verbosity")]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Initialising Logging
    ///
    /// Sets the logging verbosity to the given log-level in the following order:
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * `Error` when `-q` is used
    ///  * The `RJN_LOG` environment variable value
    ///  * `Warn` otherwise
    pub(crate) fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();

        // Default log level
        builder.filter_level(log::LevelFilter::Warn);

        builder.parse_env("RJN_LOG");
        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                3 => log::LevelFilter::Trace,
                _ => log::LevelFilter::Warn,
            });
        }
        builder.init();
    }
}

/// Cli arguments related to exporting the result
#[derive(Debug, clap::Args)]
pub(crate) struct ExportArgs {
    /// Write the result to this delimited file
    #[arg(short = 'e', long = "export")]
    pub(crate) file: Option<PathBuf>,
    /// Replace an existing file when exporting
    #[arg(short = 'o', long = "overwrite-export", default_value = "false")]
    pub(crate) overwrite: bool,
}

/// Reljoin CLI
#[derive(clap::Parser, Debug)]
#[command(author, version, about)]
pub(crate) struct CliApp {
    /// Operation to evaluate
    #[arg(value_enum)]
    pub(crate) operation: Operation,
    /// Delimited file holding the left table
    #[arg(value_parser)]
    pub(crate) table_a: PathBuf,
    /// Delimited file holding the right table
    #[arg(value_parser)]
    pub(crate) table_b: PathBuf,
    /// Field delimiter for reading tables and exporting results
    #[arg(short, long, default_value_t = ',')]
    pub(crate) delimiter: char,
    /// Token standing in for right-table values of an unmatched left row
    #[arg(long = "placeholder", default_value = DANGLING_PLACEHOLDER)]
    pub(crate) placeholder: String,
    /// Arguments related to exporting
    #[command(flatten)]
    pub(crate) export: ExportArgs,
    /// Arguments related to logging
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,
}
