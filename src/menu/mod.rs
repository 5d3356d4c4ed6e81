//! Context-menu entries offered to the host file manager.
//!
//! The host hands over [`Location`]s, asks for [`MenuItem`]s and calls
//! [`MenuProvider::activate`] when the user picks one.


use std::path::PathBuf;

use log::warn;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::config::Config;
use crate::error::TerminalError;
use crate::terminal::ResolvedTerminal;

/// A file or directory the user invoked the menu on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    uri: String,
    url: Option<Url>,
    is_directory: bool,
}

impl Location {
    /// Wrap a host-provided URI.
    #[must_use]
    pub fn new(uri: impl Into<String>, is_directory: bool) -> Self {
        let uri = uri.into();
        let url = Url::parse(&uri).ok();
        Self {
            uri,
            url,
            is_directory,
        }
    }

    /// The raw URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Whether the location is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// URI scheme such as `file` or `sftp`; `None` if the URI does not parse.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.url.as_ref().map(Url::scheme)
    }

    /// Display name: the file name of a local path, else the last
    /// percent-decoded path segment, else the host.
    #[must_use]
    pub fn name(&self) -> String {
        if let Some(path) = self.path() {
            return path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        }
        let Some(url) = &self.url else {
            return self.uri.clone();
        };
        url.path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .or_else(|| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "/".to_string())
    }

    /// Local filesystem path, or `None` for non-`file` URIs.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.url.as_ref()?.to_file_path().ok()
    }
}

/// One entry in the context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable identifier registered with the host.
    pub name: &'static str,
    /// Text shown in the menu.
    pub label: String,
    /// Tooltip.
    pub tip: String,
    /// Where the item opens a terminal.
    pub location: Location,
}

/// Capability a file manager calls to populate its context menus.
pub trait MenuProvider {
    /// Items for a selection of files.
    fn get_file_items(&self, files: &[Location]) -> Vec<MenuItem>;

    /// Items for the background of an open folder.
    fn get_background_items(&self, folder: &Location) -> Vec<MenuItem>;

    /// Run the action behind `item`.
    fn activate(&self, item: &MenuItem);
}

/// Opens the configured terminal at the selected location.
#[derive(Debug, Clone)]
pub struct OpenTerminal {
    terminal: ResolvedTerminal,
    display_name: bool,
}

impl OpenTerminal {
    /// Identifier of the item offered for a selected directory.
    pub const FILE_ITEM: &'static str = "Nautiterm::open_terminal_file_item";
    /// Identifier of the item offered for a folder background.
    pub const BACKGROUND_ITEM: &'static str = "Nautiterm::open_terminal_background_item";

    /// Load the user's configuration and resolve its terminal.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::ExecutableNotFound`] when the configured
    /// terminal cannot be resolved; the extension cannot start without it.
    pub fn init() -> Result<Self, TerminalError> {
        let config = Config::load();
        let terminal = ResolvedTerminal::new(&config)?;
        Ok(Self::new(terminal, config.display_name()))
    }

    /// Build a provider around an already resolved terminal.
    #[must_use]
    pub const fn new(terminal: ResolvedTerminal, display_name: bool) -> Self {
        Self {
            terminal,
            display_name,
        }
    }

    /// The terminal this provider launches.
    #[must_use]
    pub const fn terminal(&self) -> &ResolvedTerminal {
        &self.terminal
    }

    fn label(&self) -> String {
        if self.display_name {
            format!("Open in {}", self.terminal.name())
        } else {
            "Open Terminal".to_string()
        }
    }

    fn item(&self, name: &'static str, location: &Location) -> MenuItem {
        MenuItem {
            name,
            label: self.label(),
            tip: format!("Open Terminal In {}", location.name()),
            location: location.clone(),
        }
    }
}

impl MenuProvider for OpenTerminal {
    fn get_file_items(&self, files: &[Location]) -> Vec<MenuItem> {
        match files {
            [file] if file.is_directory() && file.scheme() == Some("file") => {
                vec![self.item(Self::FILE_ITEM, file)]
            }
            _ => Vec::new(),
        }
    }

    fn get_background_items(&self, folder: &Location) -> Vec<MenuItem> {
        vec![self.item(Self::BACKGROUND_ITEM, folder)]
    }

    fn activate(&self, item: &MenuItem) {
        match item.location.path() {
            Some(path) => self.terminal.open(&path),
            None => warn!("not a local path: {}", item.location.uri()),
        }
    }
}
