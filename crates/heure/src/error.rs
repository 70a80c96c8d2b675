use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("invalid heure at {path}: {value:?}: {message}")]
    Parse {
        path: String,
        value: String,
        message: String,
    },

    #[error("invalid heure at {path}: expected a string, found {found}")]
    InvalidType { path: String, found: &'static str },

    #[error("{0}")]
    Message(String),
}

impl Error {
    /// JSON path of the object holding the offending field, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Parse { path, .. } | Error::InvalidType { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
