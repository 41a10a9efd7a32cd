//! Data processing and serialization.

use serde::Serialize;

use crate::changelog::{render, Changelog, RenderedNotes};

pub mod yaml;

pub use yaml::*;

/// Parsed changelog output structure.
#[derive(Debug, Clone, Serialize)]
pub struct ChangelogView {
    /// Version information for the changelogparser tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionInfo>,
    /// Path of the changelog that was parsed.
    pub source: String,
    /// The extracted build record.
    pub changelog: Changelog,
    /// Rendered outputs for the record.
    pub rendered: RenderedNotes,
}

/// Version information for tools and environment.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// Version of the changelogparser tool.
    pub changelogparser: String,
}

impl ChangelogView {
    /// Creates a view of `changelog` read from `source`.
    pub fn new(source: impl Into<String>, changelog: Changelog) -> Self {
        let rendered = render(&changelog);
        Self {
            versions: Some(VersionInfo {
                changelogparser: crate::VERSION.to_string(),
            }),
            source: source.into(),
            changelog,
            rendered,
        }
    }
}
