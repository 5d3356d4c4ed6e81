//! User configuration: which terminal to launch and how to label it.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Terminal used when the configuration names none.
pub const DEFAULT_TERMINAL: &str = "gnome-terminal";

/// File name of the configuration document inside the config directory.
pub const CONFIG_FILE_NAME: &str = "nautiterm.yml";

/// User preferences, read once when the extension starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "terminal")]
    terminal_name: String,
    #[serde(rename = "display-name")]
    display_name: bool,
}

/// On-disk shape. Every field is optional and unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    terminal: Option<String>,
    #[serde(rename = "display-name")]
    display_name: Option<bool>,
}

impl Config {
    /// Build a configuration; an empty `terminal_name` selects [`DEFAULT_TERMINAL`].
    #[must_use]
    pub fn new(terminal_name: impl Into<String>, display_name: bool) -> Self {
        let terminal_name = terminal_name.into();
        let terminal_name = if terminal_name.is_empty() {
            DEFAULT_TERMINAL.to_string()
        } else {
            terminal_name
        };
        Self {
            terminal_name,
            display_name,
        }
    }

    /// Executable name or path of the preferred terminal.
    #[must_use]
    pub fn terminal_name(&self) -> &str {
        &self.terminal_name
    }

    /// Whether menu labels should mention the terminal by name.
    #[must_use]
    pub const fn display_name(&self) -> bool {
        self.display_name
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINAL, true)
    }
}

impl RawConfig {
    fn into_config(self) -> Config {
        Config::new(self.terminal.unwrap_or_default(), self.display_name.unwrap_or(true))
    }
}
