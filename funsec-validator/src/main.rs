// print_stderr is allowed because this is a CLI binary: output failures are
// reported on stderr so stdout keeps only the diagnostic token.
#![allow(clippy::print_stderr)]

mod cli;
mod logging;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
