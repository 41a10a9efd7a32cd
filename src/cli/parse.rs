//! Parse command: turns a changelog into Markdown release notes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::changelog::{parse_file, render, write_output, ChangelogError};
use crate::utils::settings::{self, DEFAULT_FILE, DEFAULT_OUTFILE, FILE_ENV, OUTFILE_ENV};

/// Parse command options.
#[derive(Parser)]
pub struct ParseCommand {
    /// Changelog to parse (falls back to $CHANGELOGPARSER_FILE, then CHANGELOG).
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Release notes to write (falls back to $CHANGELOGPARSER_OUTFILE, then
    /// CHANGELOG-RELEASENOTES.md).
    #[arg(long, value_name = "PATH")]
    pub outfile: Option<String>,

    /// Prints the comma-separated issue ids, or writes them to PATH.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub with_issues: Option<Option<PathBuf>>,

    /// Prints the version summary, or writes it to PATH.
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub with_version: Option<Option<PathBuf>>,
}

impl ParseCommand {
    /// Executes the parse command.
    pub fn execute(self) -> Result<()> {
        let settings = settings::load_or_default();
        let file = settings.resolve(self.file, FILE_ENV, DEFAULT_FILE);
        let outfile = settings.resolve(self.outfile, OUTFILE_ENV, DEFAULT_OUTFILE);

        if file.trim().is_empty() || outfile.trim().is_empty() {
            return Err(ChangelogError::InvalidArgument(
                "Missing values: file, outfile".to_string(),
            )
            .into());
        }

        info!(file = %file, outfile = %outfile, "Parsing changelog");
        let changelog = parse_file(&file)?;
        let notes = render(&changelog);

        write_output(&outfile, &notes.markdown)?;
        info!(outfile = %outfile, "Wrote release notes");

        if let Some(target) = &self.with_issues {
            match &notes.ticket_summary {
                Some(summary) => emit(target.as_deref(), summary)?,
                None => debug!("No tickets, skipping issue summary"),
            }
        }

        if let Some(target) = &self.with_version {
            emit(target.as_deref(), &notes.build_info)?;
        }

        Ok(())
    }
}

/// Prints `content` to stdout, or writes it to `target` when given.
fn emit(target: Option<&Path>, content: &str) -> Result<(), ChangelogError> {
    match target {
        Some(path) => write_output(path, content),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
