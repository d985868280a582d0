//! Error types for timer file loading

use std::path::PathBuf;
use thiserror::Error;

use crate::state::RegistryError;

/// Why a single line of a timer file was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected NAME=COUNT, found no '='")]
    MissingSeparator,

    #[error("timer name is empty")]
    EmptyName,

    #[error("timer name is longer than {max} characters")]
    NameTooLong { max: usize },

    #[error("invalid count {0:?}: expected a non-negative whole number")]
    InvalidCount(String),
}

/// Errors during timer file loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read line {line} of {path}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse line {line} of {path} ({content})")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
        #[source]
        source: ParseError,
    },

    #[error("invalid timer file {path}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: RegistryError,
    },
}
