//! Markdown and summary output for a [`Changelog`].

use serde::Serialize;

use super::analyzer::ticket_id;
use super::record::Changelog;

/// Everything produced from one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedNotes {
    /// Release notes fragment, see [`textualize`].
    pub markdown: String,
    /// Comma-joined issue ids, see [`ticket_id_summary`].
    pub ticket_summary: Option<String>,
    /// One-line version summary, see [`build_info_summary`].
    pub build_info: String,
}

/// Renders all outputs for `changelog`.
pub fn render(changelog: &Changelog) -> RenderedNotes {
    RenderedNotes {
        markdown: textualize(changelog),
        ticket_summary: ticket_id_summary(changelog),
        build_info: build_info_summary(changelog),
    }
}

/// Renders the header line followed by bulleted comments, then bulleted
/// tickets. Entries are newest first, i.e. the reverse of file order.
pub fn textualize(changelog: &Changelog) -> String {
    let mut text = format!("{} #{}\n", changelog.version(), changelog.build_number());

    for entry in changelog
        .comments()
        .iter()
        .rev()
        .chain(changelog.tickets().iter().rev())
    {
        text.push_str(&format!("* {entry}\n"));
    }

    text
}

/// Returns the issue ids of all tickets, newest first, joined by `,`.
pub fn ticket_id_summary(changelog: &Changelog) -> Option<String> {
    if changelog.tickets().is_empty() {
        return None;
    }

    let ids: Vec<&str> = changelog
        .tickets()
        .iter()
        .rev()
        .map(String::as_str)
        .map(ticket_id)
        .collect();
    Some(ids.join(","))
}

/// Returns `Version: <version> Number:<build>`.
pub fn build_info_summary(changelog: &Changelog) -> String {
    format!(
        "Version: {} Number:{}",
        changelog.version(),
        changelog.build_number()
    )
}
