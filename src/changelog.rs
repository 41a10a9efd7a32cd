//! Changelog analysis: extraction, validation and rendering of the latest build.

pub mod analyzer;
pub mod error;
pub mod record;
pub mod render;

use std::fs;
use std::path::Path;

use tracing::debug;

pub use analyzer::{analyze, classify_line, ChangelogAnalyzer, DateLine, LineKind, DATE_FORMAT};
pub use error::{ChangelogError, ErrorKind};
pub use record::{build, Changelog, ParseOutcome};
pub use render::{build_info_summary, render, textualize, ticket_id_summary, RenderedNotes};

/// Reads the changelog at `path` and builds its latest record.
///
/// Read and decode failures become [`ChangelogError::ParseFailed`] with the
/// underlying message preserved.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseOutcome {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        ChangelogError::ParseFailed(format!(
            "Failed to read changelog {}: {e}",
            path.display()
        ))
    })?;
    debug!(path = %path.display(), bytes = text.len(), "Read changelog");

    build(&ChangelogAnalyzer::from_text(&text))
}

/// Writes `content` to `path`, mapping failures to
/// [`ChangelogError::FileWriteFailed`].
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<(), ChangelogError> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| {
        ChangelogError::FileWriteFailed(format!("Failed to write {}: {e}", path.display()))
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Wrote output");
    Ok(())
}
