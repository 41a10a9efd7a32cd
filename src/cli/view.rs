//! View command: outputs the extracted build in YAML format.

use anyhow::Result;
use clap::Parser;

use crate::changelog::parse_file;
use crate::data::{to_yaml, ChangelogView};
use crate::utils::settings::{self, DEFAULT_FILE, FILE_ENV};

/// View command options.
#[derive(Parser)]
pub struct ViewCommand {
    /// Changelog to parse (falls back to $CHANGELOGPARSER_FILE, then CHANGELOG).
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

impl ViewCommand {
    /// Executes the view command.
    pub fn execute(self) -> Result<()> {
        let file = settings::load_or_default().resolve(self.file, FILE_ENV, DEFAULT_FILE);

        let changelog = parse_file(&file)?;
        let yaml_output = to_yaml(&ChangelogView::new(file, changelog))?;
        println!("{yaml_output}");

        Ok(())
    }
}
