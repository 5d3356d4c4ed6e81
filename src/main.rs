//! Command-line entry point for file managers with custom actions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nautiterm::{Config, Location, OpenTerminal};

#[derive(Parser)]
#[command(name = "nautiterm", version, about = "Open a terminal at a file manager location")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the configured terminal at a location
    Open {
        /// Directory path or file:// URI (defaults to the current directory)
        #[arg(value_name = "TARGET")]
        target: Option<String>,
    },

    /// Print the resolved terminal path and name
    Which,

    /// Inspect the nautiterm configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open { target } => cmd_open(target.as_deref())?,
        Commands::Which => cmd_which()?,
        Commands::Config { action } => cmd_config(&action)?,
    }

    Ok(())
}

fn cmd_open(target: Option<&str>) -> Result<()> {
    let provider = OpenTerminal::init()?;
    let open_path = resolve_target(target)?;
    provider.terminal().open(&open_path);
    Ok(())
}

fn cmd_which() -> Result<()> {
    let provider = OpenTerminal::init()?;
    let terminal = provider.terminal();
    println!("{}", terminal.path().display());
    println!("{}", terminal.name());
    Ok(())
}

fn cmd_config(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load();
            print!("{}", serde_yaml::to_string(&config)?);
        }
        ConfigAction::Path => {
            let path = Config::path().context("Could not determine home directory")?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

/// Turn a CLI target into an absolute directory. A file opens its parent.
fn resolve_target(target: Option<&str>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    let path = match target {
        None => return Ok(cwd),
        Some(t) if t.starts_with("file:") => Location::new(t, true)
            .path()
            .with_context(|| format!("Not a local file URI: {t}"))?,
        Some(t) => cwd.join(t),
    };
    Ok(if path.is_file() {
        path.parent().map_or_else(|| path.clone(), Path::to_path_buf)
    } else {
        path
    })
}
