//! Open a configurable terminal emulator at a file manager location.

pub mod config;
pub mod error;
pub mod menu;
pub mod terminal;

pub use config::Config;
pub use error::TerminalError;
pub use menu::{Location, MenuItem, MenuProvider, OpenTerminal};
pub use terminal::ResolvedTerminal;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    /// Serializes tests that spawn terminals or change the working directory.
    pub static SPAWN_LOCK: Mutex<()> = Mutex::new(());
}
