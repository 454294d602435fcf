use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use funsec_validator::{ValidationConfig, output, validate_file};
use tracing::info;

use crate::logging;

/// Check that a file is FunSec-ready protein FASTA.
///
/// Prints nothing and exits 0 when the file passes. Otherwise prints one
/// diagnostic token and exits non-zero: ERROR (wrong format), ERROR1 (header
/// too long), ERROR2 (header contains a space), ERROR3 (invalid residue).
/// An unreadable or non-UTF-8 file prints ERROR and exits 2.
#[derive(Parser, Debug)]
#[command(name = "funsec-validator", version, about, long_about)]
struct Cli {
    /// FASTA file to validate
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Diagnostic token only
    Plain,
    /// Token plus the location of the problem
    Human,
    /// Full report as JSON
    Json,
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let report = validate_file(&cli.path, &ValidationConfig::default());
    let outcome = report.outcome();
    info!(file = %cli.path.display(), outcome = ?outcome, "validation finished");

    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Plain => output::write_plain(&report, &mut stdout)?,
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(ExitCode::from(outcome.exit_code()))
}
