//! Error types shared across the crate.

use thiserror::Error;

/// Failure to determine which terminal to launch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerminalError {
    /// The executable was not on the search path, or its symlink chain is
    /// dangling or cyclic.
    #[error("terminal executable not found: {0}")]
    ExecutableNotFound(String),
}

/// The configuration document could not be used.
///
/// Covers every reason the file at `path` did not yield a configuration.
/// `invalid` separates a file that was read but did not parse from one that
/// could not be read at all; only the former is worth telling the user about.
#[derive(Debug, Error)]
#[error("configuration at {} unavailable: {reason}", .path.display())]
pub struct ConfigUnavailable {
    /// Location of the configuration document.
    pub path: std::path::PathBuf,
    /// `true` when the file was readable but not a valid document.
    pub invalid: bool,
    /// Underlying I/O or parse error message.
    pub reason: String,
}
