//! Locating the terminal executable and starting it at a location.

mod launch;
mod resolve;


pub use launch::{Launch, WORKING_DIRECTORY_TERMINALS};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::TerminalError;

/// A terminal executable located on disk.
///
/// `path` is absolute and never a symlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTerminal {
    path: PathBuf,
    name: String,
}

impl ResolvedTerminal {
    /// Resolve the configured terminal against `$PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::ExecutableNotFound`] if the executable is not
    /// on the search path or its symlink chain does not end in a real file.
    pub fn new(config: &Config) -> Result<Self, TerminalError> {
        let search_path = std::env::var_os("PATH").unwrap_or_default();
        Self::with_search_path(config, search_path)
    }

    /// Resolve the configured terminal against an explicit search path.
    ///
    /// # Errors
    ///
    /// Same as [`ResolvedTerminal::new`].
    pub fn with_search_path(config: &Config, search_path: impl AsRef<OsStr>) -> Result<Self, TerminalError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
        let path = resolve::resolve(config.terminal_name(), search_path.as_ref(), &cwd)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| TerminalError::ExecutableNotFound(config.terminal_name().to_string()))?;
        debug!("resolved terminal {} to {}", config.terminal_name(), path.display());
        Ok(Self { path, name })
    }

    /// Absolute path of the dereferenced executable.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Basename of [`ResolvedTerminal::path`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
