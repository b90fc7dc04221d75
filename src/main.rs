//! CLI entry point for seamless texture tiling

use clap::Parser;
use std::process::ExitCode;
use tilemaker::io::cli::{Cli, FileProcessor};

// Allow print for reporting the error that ends the run
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    match processor.process() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}
