//! Error types for loading, normalizing and saving paths.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Required field missing, wrong JSON type, or an unusable segment name.
    #[error("malformed path file: {0}")]
    Malformed(String),

    /// A segment with a control-point count other than 0 or 1.
    #[error("segment `{segment}` has {count} control points, only 0 or 1 are supported")]
    UnsupportedShape { segment: String, count: usize },

    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification kept all the way to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Malformed,
    UnsupportedShape,
    Io,
}

impl Error {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::Malformed(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Malformed(_) => ErrorKind::Malformed,
            Error::UnsupportedShape { .. } => ErrorKind::UnsupportedShape,
            Error::Io { .. } => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Malformed(format!("invalid JSON: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
