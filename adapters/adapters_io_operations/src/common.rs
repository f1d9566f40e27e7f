//! I/O Errors

use std::fmt;
use std::path::{Path, PathBuf};

/// I/O operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IoError {
    /// Input path does not exist
    NotFound(PathBuf),
    /// Input exists but cannot be opened or read
    Unreadable {
        /// Input path
        path: PathBuf,
        /// Underlying error message
        reason: String,
    },
    /// Output cannot be created, written or moved into place
    WriteFailed {
        /// Output path
        path: PathBuf,
        /// Underlying error message
        reason: String,
    },
}

impl IoError {
    pub(crate) fn read(path: &Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound(path.to_path_buf())
        } else {
            IoError::Unreadable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }
        }
    }

    pub(crate) fn write(path: &Path, err: &std::io::Error) -> Self {
        IoError::WriteFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoError::NotFound(path) => write!(f, "input file {} does not exist", path.display()),
            IoError::Unreadable { path, reason } => {
                write!(f, "cannot read input file {}: {}", path.display(), reason)
            }
            IoError::WriteFailed { path, reason } => {
                write!(f, "cannot write output {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for IoError {}
