//! # changelog-parser
//!
//! Extracts the latest build from a structured CHANGELOG and renders it as a
//! Markdown release notes fragment.
//!
//! ## Quick Start
//!
//! ```rust
//! use changelog_parser::changelog::{analyze, build, textualize};
//!
//! let analyzer = analyze(["1.2.3 #42", "2016-08-21", "* first cut", "APP-1 crash on launch"]);
//! let changelog = build(&analyzer).unwrap();
//! assert_eq!(
//!     textualize(&changelog),
//!     "1.2.3 #42\n* first cut\n* APP-1 crash on launch\n"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod changelog;
pub mod cli;
pub mod data;
pub mod utils;

pub use crate::changelog::{Changelog, ChangelogAnalyzer, ChangelogError};
pub use crate::cli::Cli;

/// The current version of changelogparser.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
