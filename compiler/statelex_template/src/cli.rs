//! Command-line options of `statelex-template`.

use std::path::PathBuf;

use statelex::ChannelCapacity;
use thiserror::Error;

pub const USAGE: &str = "Usage: statelex-template <file> [--mode=pull|push|sync] [--capacity=<n>]";

/// How the scan delivers tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Pull,
    Push,
    Sync,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub path: PathBuf,
    pub mode: Mode,
    pub capacity: ChannelCapacity,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown mode `{0}` (expected pull, push or sync)")]
    UnknownMode(String),
    #[error("invalid capacity `{0}`")]
    InvalidCapacity(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

impl CliOptions {
    /// Parse the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, UsageError> {
        let mut path = None;
        let mut mode = Mode::default();
        let mut capacity = ChannelCapacity::default();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--mode=") {
                mode = match value {
                    "pull" => Mode::Pull,
                    "push" => Mode::Push,
                    "sync" => Mode::Sync,
                    other => return Err(UsageError::UnknownMode(other.to_owned())),
                };
            } else if let Some(value) = arg.strip_prefix("--capacity=") {
                let n = value
                    .parse()
                    .map_err(|_| UsageError::InvalidCapacity(value.to_owned()))?;
                capacity = ChannelCapacity::Fixed(n);
            } else if arg.starts_with('-') || path.is_some() {
                return Err(UsageError::UnexpectedArgument(arg.clone()));
            } else {
                path = Some(PathBuf::from(arg));
            }
        }

        Ok(CliOptions {
            path: path.ok_or(UsageError::MissingPath)?,
            mode,
            capacity,
        })
    }
}
