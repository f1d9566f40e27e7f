//! Debug Utilities Module
//!
//! Provides debugging utility functions.
//!
//! This module provides infrastructure for debugging:
//! - Debug output through `tracing`, written to stderr
//! - Verbosity levels mapped onto `tracing` level filters
//! - Previews of digit strings too large to print

use std::fmt;

use tracing_subscriber::EnvFilter;

/// Characters shown at each end of a digit preview
pub const PREVIEW_EDGE: usize = 32;

/// Debug utilities for debugging operations
pub struct DebugUtils;

impl DebugUtils {
    /// Level filter for a verbosity count
    ///
    /// `0` shows warnings only, each extra `-v` lowers the threshold by one
    /// level down to `trace`.
    pub fn level_for(verbosity: u8) -> &'static str {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the global subscriber
    ///
    /// An explicit verbosity wins over `RUST_LOG`; with verbosity 0 the
    /// environment filter is used when set.
    ///
    /// # Errors
    ///
    /// Returns [`DebugError::AlreadyInitialized`] if a global subscriber is
    /// already installed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::init(2).ok();
    /// tracing::debug!("visible at -vv");
    /// ```
    pub fn init(verbosity: u8) -> Result<(), DebugError> {
        let filter = if verbosity == 0 {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Self::level_for(verbosity)))
        } else {
            EnvFilter::new(Self::level_for(verbosity))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| DebugError::AlreadyInitialized(e.to_string()))
    }

    /// Bounded preview of a digit string
    ///
    /// Strings up to `2 * PREVIEW_EDGE` characters are returned unchanged.
    /// Longer strings keep both ends and report the total length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// assert_eq!(DebugUtils::preview("31415"), "31415");
    /// ```
    pub fn preview(digits: &str) -> String {
        let len = digits.chars().count();
        if len <= 2 * PREVIEW_EDGE {
            return digits.to_string();
        }
        let head: String = digits.chars().take(PREVIEW_EDGE).collect();
        let tail: String = digits.chars().skip(len - PREVIEW_EDGE).collect();
        format!("{}...{} ({} digits)", head, tail, len)
    }
}

/// Debug setup errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugError {
    /// A global subscriber was installed earlier
    AlreadyInitialized(String),
}

impl fmt::Display for DebugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugError::AlreadyInitialized(msg) => {
                write!(f, "logging already initialized: {}", msg)
            }
        }
    }
}

impl std::error::Error for DebugError {}
