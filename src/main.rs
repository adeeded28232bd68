//! Cairn binary entry point.
//!
//! Error printing lives here: any error escaping the CLI layer is rendered
//! as a single `Error: <chain>` line on stderr and the process exits 1.

use std::process::ExitCode;

fn main() -> ExitCode {
    match cairn::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
