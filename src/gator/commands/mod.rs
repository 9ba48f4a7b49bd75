//! # Command Layer
//!
//! Commands are looked up by name in a [`CommandRegistry`] and run against an
//! explicitly passed [`State`]. Handlers never print: they return a
//! [`CmdResult`] whose messages the CLI renders.
//!
//! The registry adds nothing on top of lookup-and-call. Whatever a handler
//! returns, `Ok` or `Err`, is what [`CommandRegistry::dispatch`] returns.

use crate::config::{ConfigRecord, ConfigStore};
use crate::error::{GatorError, Result};
use std::collections::HashMap;
use tracing::debug;

pub mod login;

/// Application state handed to every handler.
///
/// Owned by a single run of the program; handlers get it by `&mut`.
#[derive(Debug, Clone)]
pub struct State {
    pub config: ConfigRecord,
    pub store: ConfigStore,
}

impl State {
    /// Read the config once from `store` and wrap both up
    pub fn load(store: ConfigStore) -> Result<Self> {
        let config = store.read()?;
        Ok(Self { config, store })
    }
}

/// A command name plus its arguments, as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

pub type Handler = Box<dyn Fn(&mut State, &Invocation) -> Result<CmdResult>>;

/// Maps command names to handlers
#[derive(Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, Handler>,
}

impl CommandRegistry {
    /// Registry with every built-in command
    pub fn with_builtins() -> Self {
        let mut registry = Self::default();
        registry.register(login::NAME, login::run);
        registry
    }

    /// Add `handler` under `name`, replacing any earlier handler of that name
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut State, &Invocation) -> Result<CmdResult> + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Registered command names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the handler registered for `invocation.name`
    pub fn dispatch(&self, state: &mut State, invocation: &Invocation) -> Result<CmdResult> {
        let handler = self.handlers.get(&invocation.name).ok_or_else(|| {
            GatorError::UnknownCommand {
                name: invocation.name.clone(),
            }
        })?;
        debug!(command = %invocation.name, args = invocation.args.len(), "dispatching");
        handler(state, invocation)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> State {
        State::load(ConfigStore::at(dir.path().join(".gatorconfig.json"))).unwrap()
    }

    fn counting_handler(
        counter: Rc<Cell<usize>>,
        reply: &'static str,
    ) -> impl Fn(&mut State, &Invocation) -> Result<CmdResult> {
        move |_: &mut State, _: &Invocation| {
            counter.set(counter.get() + 1);
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(reply));
            Ok(result)
        }
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let calls = Rc::new(Cell::new(0));
        let mut registry = CommandRegistry::default();
        registry.register("login", counting_handler(calls.clone(), "login"));

        let err = registry
            .dispatch(&mut state, &Invocation::new("logout", vec![]))
            .unwrap_err();
        match err {
            GatorError::UnknownCommand { name } => assert_eq!(name, "logout"),
            other => panic!("expected unknown command, got {:?}", other),
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_dispatch_on_empty_registry() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let registry = CommandRegistry::default();

        assert!(matches!(
            registry.dispatch(&mut state, &Invocation::new("", vec![])),
            Err(GatorError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_dispatch_calls_handler_once() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let login_calls = Rc::new(Cell::new(0));
        let other_calls = Rc::new(Cell::new(0));
        let mut registry = CommandRegistry::default();
        registry.register("login", counting_handler(login_calls.clone(), "hi"));
        registry.register("reset", counting_handler(other_calls.clone(), "reset"));

        let result = registry
            .dispatch(&mut state, &Invocation::new("login", vec!["bob".into()]))
            .unwrap();

        assert_eq!(result.messages, vec![CmdMessage::success("hi")]);
        assert_eq!(login_calls.get(), 1);
        assert_eq!(other_calls.get(), 0);
    }

    #[test]
    fn test_dispatch_passes_handler_error_through() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let mut registry = CommandRegistry::default();
        registry.register("fail", |_: &mut State, _: &Invocation| {
            Err(GatorError::MissingArgument {
                command: "fail",
                argument: "thing",
            })
        });

        let err = registry
            .dispatch(&mut state, &Invocation::new("fail", vec![]))
            .unwrap_err();
        assert!(matches!(
            err,
            GatorError::MissingArgument {
                command: "fail",
                argument: "thing"
            }
        ));
    }

    #[test]
    fn test_handler_sees_invocation_and_mutates_state() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let mut registry = CommandRegistry::default();
        registry.register("set-db", |state: &mut State, inv: &Invocation| {
            state.config.db_url = inv.args.join(" ");
            Ok(CmdResult::default())
        });

        registry
            .dispatch(
                &mut state,
                &Invocation::new("set-db", vec!["postgres://db".into()]),
            )
            .unwrap();
        assert_eq!(state.config.db_url, "postgres://db");
    }

    #[test]
    fn test_register_twice_last_wins() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut registry = CommandRegistry::default();
        registry.register("login", counting_handler(first.clone(), "first"));
        registry.register("login", counting_handler(second.clone(), "second"));

        let result = registry
            .dispatch(&mut state, &Invocation::new("login", vec![]))
            .unwrap();

        assert_eq!(result.messages, vec![CmdMessage::success("second")]);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(registry.names(), vec!["login"]);
    }

    #[test]
    fn test_builtins() {
        let registry = CommandRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["login"]);
    }

    #[test]
    fn test_state_load_reads_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".gatorconfig.json");
        std::fs::write(&path, r#"{"db_url":"postgres://db","current_user_name":"zed"}"#)
            .unwrap();

        let state = State::load(ConfigStore::at(&path)).unwrap();
        assert_eq!(state.config.current_user_name, "zed");
        assert_eq!(state.store.path(), path.as_path());
    }
}
