use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use super::{Config, RawConfig, CONFIG_FILE_NAME, DEFAULT_TERMINAL};
use crate::error::ConfigUnavailable;

impl Config {
    /// Location of the configuration document, or `None` without a home directory.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }

    /// Load the user's configuration, falling back to defaults on any failure.
    ///
    /// A malformed document is reported on standard error.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            debug!("no home directory; using default configuration");
            return Self::default();
        };
        Self::load_from(&path, &mut std::io::stderr())
    }

    /// Load the document at `path`, writing a diagnostic line to `diagnostics`
    /// if it exists but cannot be parsed.
    pub fn load_from(path: &Path, diagnostics: &mut impl Write) -> Self {
        match Self::read(path) {
            Ok(config) => config,
            Err(err) if err.invalid => {
                debug!("{err}");
                // Nowhere left to report a failing diagnostics sink.
                let _ = writeln!(
                    diagnostics,
                    "nautiterm: invalid configuration file at {}, falling back to {DEFAULT_TERMINAL}",
                    path.display()
                );
                Self::default()
            }
            Err(err) => {
                debug!("{err}; using default configuration");
                Self::default()
            }
        }
    }

    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigUnavailable`] when the file cannot be read, or with
    /// `invalid` set when it is not a valid configuration document.
    pub fn read(path: &Path) -> Result<Self, ConfigUnavailable> {
        let content = std::fs::read(path).map_err(|e| ConfigUnavailable {
            path: path.to_path_buf(),
            invalid: false,
            reason: e.to_string(),
        })?;
        let invalid = |e: serde_yaml::Error| ConfigUnavailable {
            path: path.to_path_buf(),
            invalid: true,
            reason: e.to_string(),
        };

        let value: serde_yaml::Value = serde_yaml::from_slice(&content).map_err(invalid)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_value(value).map_err(invalid)?;
        Ok(raw.into_config())
    }
}

/// `$XDG_CONFIG_HOME` when it is a non-empty absolute path, else `<home>/.config`.
pub(super) fn config_path_from(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    let dir = xdg_config_home
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")))?;
    Some(dir.join(CONFIG_FILE_NAME))
}
