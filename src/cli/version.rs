//! Version command: prints the tool version.

use anyhow::Result;
use clap::Parser;

/// Version command options.
#[derive(Parser)]
pub struct VersionCommand {}

impl VersionCommand {
    /// Executes the version command.
    pub fn execute(self) -> Result<()> {
        println!("{}", crate::VERSION);
        Ok(())
    }
}
