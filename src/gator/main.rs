//! # gator
//!
//! Thin binary: all terminal concerns live in `cli/`, the command registry and
//! config store live in the `gator` library. This file only runs the CLI and
//! turns an error into a message on stderr plus a non-zero exit.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
