//! The html2md-filter command-line executable.

use std::process::ExitCode;

mod app;
mod cli;

fn main() -> ExitCode {
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Each message already carries its cause.
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
