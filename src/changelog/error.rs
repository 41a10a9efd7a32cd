//! Changelog parsing error handling.

use thiserror::Error;

/// Failures that can originate from reading, validating or writing a changelog.
///
/// Every variant carries the human-readable description that is shown to the
/// user; `Display` prints it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChangelogError {
    /// One or more arguments was invalid.
    #[error("{0}")]
    InvalidArgument(String),

    /// The changelog could not be read or no record could be produced.
    #[error("{0}")]
    ParseFailed(String),

    /// The latest build has no concrete date yet.
    #[error("{0}")]
    BuildIsTbd(String),

    /// The build header, date or both content sections are missing.
    #[error("{0}")]
    BuildHasNoTicketsNorComments(String),

    /// Release notes could not be written.
    #[error("{0}")]
    FileWriteFailed(String),
}

/// Discriminant of a [`ChangelogError`] without its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ChangelogError::InvalidArgument`].
    InvalidArgument,
    /// See [`ChangelogError::ParseFailed`].
    ParseFailed,
    /// See [`ChangelogError::BuildIsTbd`].
    BuildIsTbd,
    /// See [`ChangelogError::BuildHasNoTicketsNorComments`].
    BuildHasNoTicketsNorComments,
    /// See [`ChangelogError::FileWriteFailed`].
    FileWriteFailed,
}

impl ChangelogError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::ParseFailed(_) => ErrorKind::ParseFailed,
            Self::BuildIsTbd(_) => ErrorKind::BuildIsTbd,
            Self::BuildHasNoTicketsNorComments(_) => ErrorKind::BuildHasNoTicketsNorComments,
            Self::FileWriteFailed(_) => ErrorKind::FileWriteFailed,
        }
    }

    /// Returns the description carried by this error.
    pub fn description(&self) -> &str {
        match self {
            Self::InvalidArgument(d)
            | Self::ParseFailed(d)
            | Self::BuildIsTbd(d)
            | Self::BuildHasNoTicketsNorComments(d)
            | Self::FileWriteFailed(d) => d,
        }
    }
}
