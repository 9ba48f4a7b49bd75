use clap::Parser;
use gator::commands::Invocation;

pub const USAGE: &str = "gator <command> [arguments...]";

/// Everything after the program name belongs to the command, so clap's own
/// help and version flags are off and hyphenated words are kept as values.
#[derive(Parser, Debug)]
#[command(name = "gator", version)]
#[command(about = "Command-line skeleton with a JSON config in your home directory", long_about = None)]
#[command(override_usage = USAGE)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to run (e.g. login) followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Split off the command name, if one was given
    pub fn into_invocation(self) -> Option<Invocation> {
        let mut words = self.words.into_iter();
        let name = words.next()?;
        Some(Invocation::new(name, words.collect()))
    }
}
