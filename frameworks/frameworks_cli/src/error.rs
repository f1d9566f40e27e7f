//! CLI Errors

use std::fmt;

use adapters_io_operations::IoError;
use usecases_conversion::ConversionError;

/// Errors reported by a command-line run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Argument combination rejected
    InvalidArguments(String),
    /// Conversion failed
    Conversion(ConversionError),
    /// Input or output failed
    Io(IoError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArguments(msg) => write!(f, "{}", msg),
            CliError::Conversion(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidArguments(_) => None,
            CliError::Conversion(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<ConversionError> for CliError {
    fn from(err: ConversionError) -> Self {
        CliError::Conversion(err)
    }
}

impl From<IoError> for CliError {
    fn from(err: IoError) -> Self {
        CliError::Io(err)
    }
}
