use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, warn};

use super::ResolvedTerminal;

/// Terminals known to accept `--working-directory=<dir>`, matched as
/// substrings of the executable's basename.
pub const WORKING_DIRECTORY_TERMINALS: &[&str] = &["gnome-terminal", "terminator"];

/// How a terminal is told where to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// Pass this single argument; the caller's working directory is untouched.
    WorkingDirectoryFlag(OsString),
    /// Change the caller's working directory, then start with no arguments.
    ChangeDirectory,
}

impl ResolvedTerminal {
    /// Decide how to start this terminal in `open_path`.
    #[must_use]
    pub fn launch(&self, open_path: &Path) -> Launch {
        if WORKING_DIRECTORY_TERMINALS.iter().any(|t| self.name.contains(t)) {
            let mut arg = OsString::from("--working-directory=");
            arg.push(open_path);
            Launch::WorkingDirectoryFlag(arg)
        } else {
            Launch::ChangeDirectory
        }
    }

    /// Start the terminal in `open_path` without waiting for it.
    ///
    /// Failures are logged, never returned. For terminals without a
    /// working-directory flag this changes the working directory of the
    /// whole process, which is only sound with a single caller at a time.
    pub fn open(&self, open_path: &Path) {
        let mut cmd = Command::new(&self.path);
        match self.launch(open_path) {
            Launch::WorkingDirectoryFlag(arg) => {
                cmd.arg(arg);
            }
            Launch::ChangeDirectory => {
                if let Err(e) = std::env::set_current_dir(open_path) {
                    warn!("cannot change directory to {}: {e}", open_path.display());
                    return;
                }
            }
        }

        let spawned = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => debug!("started {} (pid {}) in {}", self.name, child.id(), open_path.display()),
            Err(e) => warn!("failed to start {}: {e}", self.path.display()),
        }
    }
}
