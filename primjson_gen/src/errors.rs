use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by loading and emission.
pub type GenResult<T> = Result<T, GenError>;

/// Failures outside the user's declarations: unreadable or malformed input
/// files and unwritable output. Problems *in* the declarations are reported
/// as diagnostics instead.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse declarations in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("invalid generator options in '{}': {source}", path.display())]
    Options {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("invalid generator option '{option}': {reason}")]
    InvalidOption { option: &'static str, reason: &'static str },

    #[error("failed to write generated source '{logical_name}': {source}")]
    Write {
        logical_name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for the adapter runtime model.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The token had an accepted kind but its payload could not be decoded.
    #[error("{accessor} cannot decode token {token}")]
    Accessor { accessor: &'static str, token: String },

    /// A write accessor was handed a value of another primitive kind.
    #[error("{accessor} cannot write value {value}")]
    ValueMismatch { accessor: &'static str, value: String },

    /// The reader has no token left to consume.
    #[error("unexpected end of token stream")]
    UnexpectedEnd,

    #[error("an adapter for '{type_name}' is already registered")]
    DuplicateAdapter { type_name: String },

    #[error("no adapter registered for '{type_name}'")]
    UnknownAdapter { type_name: String },
}
