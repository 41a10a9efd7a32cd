//! CLI interface for changelogparser.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod help;
pub mod parse;
pub mod version;
pub mod view;

pub use parse::ParseCommand;
pub use version::VersionCommand;
pub use view::ViewCommand;

/// changelogparser: Turns the latest CHANGELOG entry into release notes.
#[derive(Parser)]
#[command(name = "changelogparser")]
#[command(about = "Turns the latest CHANGELOG entry into release notes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parses a changelog and writes Markdown release notes.
    Parse(ParseCommand),
    /// Parses a changelog and prints the extracted build as YAML.
    View(ViewCommand),
    /// Displays the current version of changelogparser.
    Version(VersionCommand),
    /// Displays comprehensive help for all commands.
    #[command(name = "help-all")]
    HelpAll(help::HelpCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Parse(parse_cmd) => parse_cmd.execute(),
            Commands::View(view_cmd) => view_cmd.execute(),
            Commands::Version(version_cmd) => version_cmd.execute(),
            Commands::HelpAll(help_cmd) => help_cmd.execute(),
        }
    }
}
