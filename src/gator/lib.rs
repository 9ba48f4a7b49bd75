//! # Gator Architecture
//!
//! Gator is a small command-line skeleton: it reads a JSON config from the
//! user's home directory, runs one named command, and lets that command
//! update and save the config.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses argv, prints messages, owns the exit code         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/)                                  │
//! │  - CommandRegistry: name → handler, lookup and call         │
//! │  - Handlers take &mut State, return CmdResult               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Config Layer (config.rs)                                   │
//! │  - ConfigStore: ~/.gatorconfig.json, missing file = default │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `commands` inward nothing writes to stdout/stderr or exits the
//! process. State is passed explicitly; there are no globals.
//!
//! ## Module Overview
//!
//! - [`commands`]: Command registry, shared state and handlers
//! - [`config`]: Config record and its on-disk store
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
