//! The validated build record and the rules that produce it.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use super::analyzer::ChangelogAnalyzer;
use super::error::ChangelogError;

/// Result of turning analyzer output into a record.
pub type ParseOutcome = Result<Changelog, ChangelogError>;

/// A single released build extracted from a changelog.
///
/// Only [`build`] constructs one, so every `Changelog` has a concrete date and
/// at least one comment or ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changelog {
    version: String,
    build_number: u64,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comments: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tickets: Vec<String>,
}

impl Changelog {
    /// Dotted version string, e.g. `1.2.3`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Build counter.
    pub fn build_number(&self) -> u64 {
        self.build_number
    }

    /// Release date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Comments in file order.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Ticket lines in file order.
    pub fn tickets(&self) -> &[String] {
        &self.tickets
    }
}

/// Validates analyzer output and assembles a [`Changelog`].
///
/// A TBD build is reported before anything else; a missing header, date or
/// content is reported as [`ChangelogError::BuildHasNoTicketsNorComments`].
pub fn build(analyzer: &ChangelogAnalyzer) -> ParseOutcome {
    if analyzer.is_tbd() {
        debug!(date_line = ?analyzer.date_line(), "Build date is not concrete");
        return Err(ChangelogError::BuildIsTbd("Build is TBD".to_string()));
    }

    let comments = analyzer.comments().unwrap_or_default();
    let tickets = analyzer.tickets().unwrap_or_default();

    let (Some(version), Some(build_number), Some(date)) = (
        analyzer.build_version_string(),
        analyzer.build_number(),
        analyzer.build_date(),
    ) else {
        return Err(no_content());
    };
    if comments.is_empty() && tickets.is_empty() {
        return Err(no_content());
    }

    info!(version, build_number, %date, "Built changelog record");
    Ok(Changelog {
        version: version.to_string(),
        build_number,
        date,
        comments: comments.to_vec(),
        tickets: tickets.to_vec(),
    })
}

fn no_content() -> ChangelogError {
    ChangelogError::BuildHasNoTicketsNorComments("Build has no tickets nor comments".to_string())
}
