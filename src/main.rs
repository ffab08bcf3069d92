//! gigboard entry point
//!
//! Argument parsing, runtime construction and serving all live in the CLI
//! module. This file only reports failures and sets the exit code.

use gigboard::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
