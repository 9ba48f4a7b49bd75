use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatorError {
    #[error("could not determine user home directory")]
    PathResolution,

    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode config file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode config for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No command provided.\nUsage: {usage}")]
    NoCommand { usage: String },

    #[error("unknown command: '{name}'")]
    UnknownCommand { name: String },

    #[error("{argument} argument is required for {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command} failed to persist config: {source}")]
    Persist {
        command: &'static str,
        #[source]
        source: Box<GatorError>,
    },
}

pub type Result<T> = std::result::Result<T, GatorError>;
