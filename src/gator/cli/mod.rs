//! # CLI Layer
//!
//! The only part of gator that knows about argv, stdout/stderr and exit codes.
//!
//! 1. **Logging**: `tracing` to stderr, filtered by `RUST_LOG` (default `warn`)
//! 2. **Argument Parsing**: `gator <command> [arguments...]` via clap
//! 3. **Context Setup**: read the config once into a [`State`]
//! 4. **Dispatch**: look the command up in the [`CommandRegistry`]
//! 5. **Output**: render the handler's messages to stdout
//!
//! Errors bubble up to `main`, which prints them to stderr and exits with 1.

mod render;
mod setup;

use clap::Parser;
use gator::commands::{CommandRegistry, State};
use gator::config::ConfigStore;
use gator::error::{GatorError, Result};
use render::print_messages;
use setup::{Cli, USAGE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    init_logging();

    let registry = CommandRegistry::with_builtins();
    let invocation = Cli::parse()
        .into_invocation()
        .ok_or_else(|| GatorError::NoCommand {
            usage: format!("{}\nCommands: {}", USAGE, registry.names().join(", ")),
        })?;

    let store = ConfigStore::locate()?;
    debug!(path = %store.path().display(), "using config file");
    let mut state = State::load(store)?;

    let result = registry.dispatch(&mut state, &invocation)?;
    print_messages(&result.messages);
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
