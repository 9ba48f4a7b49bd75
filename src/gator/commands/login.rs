use crate::commands::{CmdMessage, CmdResult, Invocation, State};
use crate::error::{GatorError, Result};
use tracing::info;

pub const NAME: &str = "login";

/// Record `args[0]` as the current user and save the config.
///
/// Extra arguments are ignored with a warning.
pub fn run(state: &mut State, invocation: &Invocation) -> Result<CmdResult> {
    let username = invocation
        .args
        .first()
        .ok_or(GatorError::MissingArgument {
            command: NAME,
            argument: "username",
        })?;

    state
        .store
        .set_current_user(&mut state.config, username)
        .map_err(|e| GatorError::Persist {
            command: NAME,
            source: Box::new(e),
        })?;
    info!(user = %username, "current user updated");

    let mut result = CmdResult::default();
    if invocation.args.len() > 1 {
        result.add_message(CmdMessage::warning(format!(
            "Ignoring extra arguments: {}",
            invocation.args[1..].join(" ")
        )));
    }
    result.add_message(CmdMessage::success(format!(
        "Logged in as user: {}",
        username
    )));
    Ok(result)
}
