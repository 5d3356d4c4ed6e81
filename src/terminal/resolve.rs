use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::TerminalError;

/// Upper bound on symlink hops, matching the kernel's `ELOOP` limit.
const MAX_LINK_HOPS: usize = 40;

/// Find `name` on `search_path` and follow symlinks until a real file is reached.
pub(super) fn resolve(name: &str, search_path: &OsStr, cwd: &Path) -> Result<PathBuf, TerminalError> {
    let not_found = || TerminalError::ExecutableNotFound(name.to_string());

    let mut candidate = lookup(name, search_path, cwd).ok_or_else(not_found)?;
    let mut seen = HashSet::new();

    loop {
        let meta = std::fs::symlink_metadata(&candidate).map_err(|_| not_found())?;
        if !meta.file_type().is_symlink() {
            return Ok(candidate);
        }
        if !seen.insert(candidate.clone()) || seen.len() > MAX_LINK_HOPS {
            debug!("symlink loop at {}", candidate.display());
            return Err(not_found());
        }
        let target = std::fs::read_link(&candidate).map_err(|_| not_found())?;
        debug!("following {} -> {}", candidate.display(), target.display());
        candidate = follow(&candidate, &target, search_path, cwd).ok_or_else(not_found)?;
    }
}

/// Resolve one link hop; relative targets are relative to the link's directory.
fn follow(link: &Path, target: &Path, search_path: &OsStr, cwd: &Path) -> Option<PathBuf> {
    let joined = match link.parent() {
        Some(parent) if target.is_relative() => parent.join(target),
        _ => target.to_path_buf(),
    };
    lookup(&joined, search_path, cwd)
}

fn lookup(name: impl AsRef<OsStr>, search_path: &OsStr, cwd: &Path) -> Option<PathBuf> {
    which::which_in(name, Some(search_path), cwd).ok()
}
