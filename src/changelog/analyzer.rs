//! Line classification and field extraction for changelog text.
//!
//! The latest build is described by the top of the file:
//!
//! ```text
//! 1.2.3 #42          <- header: version and build number
//! 2016-08-21         <- date, or TBD while unreleased
//! * comment one      <- comments are bullets
//! ISSUE-1 fix crash  <- tickets start with an issue id
//! ```
//!
//! The header is the first non-blank line and the date is the second. Lines
//! after the date, up to the next `<version> #<build>` line, make up the body,
//! where each line is a ticket, a comment or ignored. Older builds below are
//! not read.

use std::sync::{LazyLock, OnceLock};

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, trace};

/// Format of a concrete build date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<version>\d+(?:\.\d+)*)(?:\s+#(?P<build>\S+))?$").unwrap()
});

static PREVIOUS_BUILD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\d+)*\s+#\S+$").unwrap());

static TBD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)tbd").unwrap());

static TICKET_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w").unwrap());

static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]\s+(?P<text>\S.*)$").unwrap());

/// Classification of the date line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLine {
    /// A date in [`DATE_FORMAT`].
    Concrete(NaiveDate),
    /// The date is explicitly marked as to be determined.
    ToBeDetermined,
    /// A date line is present but is neither a date nor a TBD marker.
    Malformed(String),
    /// The text has fewer than two non-blank lines.
    Missing,
}

/// Classification of a single body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line whose first token is an issue id.
    Ticket,
    /// A `*` or `-` bullet.
    Comment,
    /// Anything else.
    Ignored,
}

/// Classifies a body line. The ticket pattern wins over the comment pattern.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim_end();
    if TICKET_PATTERN.is_match(line) {
        LineKind::Ticket
    } else if COMMENT_PATTERN.is_match(line) {
        LineKind::Comment
    } else {
        LineKind::Ignored
    }
}

/// Returns the issue id of a ticket line, i.e. its first whitespace-delimited
/// token.
pub fn ticket_id(ticket: &str) -> &str {
    ticket.split_whitespace().next().unwrap_or(ticket)
}

#[derive(Debug)]
struct Header {
    version: String,
    build_number: Option<u64>,
}

#[derive(Debug, Default)]
struct Sections {
    comments: Vec<String>,
    tickets: Vec<String>,
}

/// Extracts the latest build from changelog lines.
///
/// Each accessor is computed on first use and cached, so repeated calls are
/// cheap and always return the same value.
#[derive(Debug)]
pub struct ChangelogAnalyzer {
    lines: Vec<String>,
    header: OnceLock<Option<Header>>,
    date_line: OnceLock<DateLine>,
    sections: OnceLock<Sections>,
}

/// Creates an analyzer over an ordered sequence of lines.
pub fn analyze<I, S>(lines: I) -> ChangelogAnalyzer
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ChangelogAnalyzer::new(lines.into_iter().map(Into::into).collect())
}

impl ChangelogAnalyzer {
    /// Creates an analyzer over the given lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            header: OnceLock::new(),
            date_line: OnceLock::new(),
            sections: OnceLock::new(),
        }
    }

    /// Splits `text` into lines (`\n` or `\r\n`) and creates an analyzer.
    pub fn from_text(text: &str) -> Self {
        analyze(text.lines())
    }

    /// Returns true unless the date line holds a concrete date.
    pub fn is_tbd(&self) -> bool {
        !matches!(self.date_line(), DateLine::Concrete(_))
    }

    /// Returns the dotted version from the header line.
    pub fn build_version_string(&self) -> Option<&str> {
        self.header().map(|h| h.version.as_str())
    }

    /// Returns the build number that follows `#` on the header line.
    pub fn build_number(&self) -> Option<u64> {
        self.header().and_then(|h| h.build_number)
    }

    /// Returns the build date, or `None` if it is missing, malformed or TBD.
    pub fn build_date(&self) -> Option<NaiveDate> {
        match self.date_line() {
            DateLine::Concrete(date) => Some(*date),
            _ => None,
        }
    }

    /// Returns the comment texts (bullet removed) in file order, or `None`
    /// when the body has no comment lines.
    pub fn comments(&self) -> Option<&[String]> {
        non_empty(&self.sections().comments)
    }

    /// Returns the ticket lines in file order, or `None` when the body has no
    /// ticket lines.
    pub fn tickets(&self) -> Option<&[String]> {
        non_empty(&self.sections().tickets)
    }

    /// Returns how the date line was classified.
    pub fn date_line(&self) -> &DateLine {
        self.date_line.get_or_init(|| {
            let classified = match self.significant_lines().nth(1) {
                None => DateLine::Missing,
                Some((_, line)) => classify_date(line.trim()),
            };
            debug!(date_line = ?classified, "Classified date line");
            classified
        })
    }

    fn header(&self) -> Option<&Header> {
        self.header
            .get_or_init(|| {
                let (_, line) = self.significant_lines().next()?;
                let Some(caps) = HEADER_PATTERN.captures(line.trim()) else {
                    debug!(line, "First line is not a version header");
                    return None;
                };
                let version = caps["version"].to_string();
                let build_number = caps.name("build").and_then(|b| b.as_str().parse().ok());
                debug!(version = %version, build_number = ?build_number, "Parsed header");
                Some(Header {
                    version,
                    build_number,
                })
            })
            .as_ref()
    }

    fn sections(&self) -> &Sections {
        self.sections.get_or_init(|| {
            let mut sections = Sections::default();
            let Some((date_index, _)) = self.significant_lines().nth(1) else {
                return sections;
            };

            for line in &self.lines[date_index + 1..] {
                let line = line.trim_end();
                if line.is_empty() {
                    continue;
                }
                if PREVIOUS_BUILD_PATTERN.is_match(line.trim_start()) {
                    debug!(line, "Reached previous build");
                    break;
                }
                match classify_line(line) {
                    LineKind::Ticket => sections.tickets.push(line.to_string()),
                    LineKind::Comment => {
                        if let Some(caps) = COMMENT_PATTERN.captures(line) {
                            sections.comments.push(caps["text"].to_string());
                        }
                    }
                    LineKind::Ignored => trace!(line, "Ignoring unrecognized line"),
                }
            }

            debug!(
                comments = sections.comments.len(),
                tickets = sections.tickets.len(),
                "Extracted body sections"
            );
            sections
        })
    }

    /// Non-blank lines paired with their index.
    fn significant_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i, l.as_str()))
            .filter(|(_, l)| !l.trim().is_empty())
    }
}

fn classify_date(value: &str) -> DateLine {
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        DateLine::Concrete(date)
    } else if TBD_PATTERN.is_match(value) {
        DateLine::ToBeDetermined
    } else {
        DateLine::Malformed(value.to_string())
    }
}

fn non_empty(items: &[String]) -> Option<&[String]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChangelogAnalyzer {
        analyze([
            "1.2.3 #42",
            "2016-08-21",
            "* comment one",
            "* comment two",
            "ISSUE1 ticket desc",
        ])
    }

    // ── header ─────────────────────────────────────────────────────

    #[test]
    fn header_version_and_build() {
        let analyzer = sample();
        assert_eq!(analyzer.build_version_string(), Some("1.2.3"));
        assert_eq!(analyzer.build_number(), Some(42));
    }

    #[test]
    fn header_after_leading_blank_lines() {
        let analyzer = analyze(["", "   ", "2.0 #7", "2017-01-02"]);
        assert_eq!(analyzer.build_version_string(), Some("2.0"));
        assert_eq!(analyzer.build_number(), Some(7));
    }

    #[test]
    fn header_without_build_number() {
        let analyzer = analyze(["1.0.0", "2016-08-21"]);
        assert_eq!(analyzer.build_version_string(), Some("1.0.0"));
        assert_eq!(analyzer.build_number(), None);
    }

    #[test]
    fn header_with_non_numeric_build() {
        let analyzer = analyze(["1.0.0 #abc", "2016-08-21"]);
        assert_eq!(analyzer.build_version_string(), Some("1.0.0"));
        assert_eq!(analyzer.build_number(), None);
    }

    #[test]
    fn header_that_is_not_a_version() {
        let analyzer = analyze(["Release notes", "2016-08-21"]);
        assert_eq!(analyzer.build_version_string(), None);
        assert_eq!(analyzer.build_number(), None);
    }

    // ── date ───────────────────────────────────────────────────────

    #[test]
    fn concrete_date() {
        let analyzer = sample();
        assert!(!analyzer.is_tbd());
        assert_eq!(
            analyzer.build_date(),
            NaiveDate::from_ymd_opt(2016, 8, 21)
        );
    }

    #[test]
    fn tbd_date() {
        let analyzer = analyze(["1.2.3 #42", "Date: tbd", "* comment"]);
        assert!(analyzer.is_tbd());
        assert_eq!(analyzer.date_line(), &DateLine::ToBeDetermined);
        assert_eq!(analyzer.build_date(), None);
    }

    #[test]
    fn missing_date_is_tbd() {
        let analyzer = analyze(["1.2.3 #42"]);
        assert!(analyzer.is_tbd());
        assert_eq!(analyzer.date_line(), &DateLine::Missing);
    }

    #[test]
    fn malformed_date_is_tbd() {
        let analyzer = analyze(["1.2.3 #42", "21/08/2016"]);
        assert!(analyzer.is_tbd());
        assert_eq!(
            analyzer.date_line(),
            &DateLine::Malformed("21/08/2016".to_string())
        );
    }

    // ── body ───────────────────────────────────────────────────────

    #[test]
    fn comments_and_tickets_in_file_order() {
        let analyzer = sample();
        assert_eq!(
            analyzer.comments(),
            Some(&["comment one".to_string(), "comment two".to_string()][..])
        );
        assert_eq!(
            analyzer.tickets(),
            Some(&["ISSUE1 ticket desc".to_string()][..])
        );
    }

    #[test]
    fn dash_bullets_are_comments() {
        let analyzer = analyze(["1.0 #1", "2016-08-21", "- dashed", "* starred"]);
        assert_eq!(
            analyzer.comments(),
            Some(&["dashed".to_string(), "starred".to_string()][..])
        );
        assert_eq!(analyzer.tickets(), None);
    }

    #[test]
    fn absent_sections_are_none() {
        let analyzer = analyze(["1.0 #1", "2016-08-21"]);
        assert_eq!(analyzer.comments(), None);
        assert_eq!(analyzer.tickets(), None);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let analyzer =
            ChangelogAnalyzer::from_text("1.0 #1\r\n2016-08-21\r\n\r\n* one\r\nABC-12 fix\r\n");
        assert_eq!(analyzer.comments(), Some(&["one".to_string()][..]));
        assert_eq!(analyzer.tickets(), Some(&["ABC-12 fix".to_string()][..]));
    }

    #[test]
    fn unrecognized_lines_are_ignored() {
        let analyzer = analyze([
            "1.0 #1",
            "2016-08-21",
            "  * indented bullet",
            "**bold**",
            "#hashtag",
            "* kept",
        ]);
        assert_eq!(analyzer.comments(), Some(&["kept".to_string()][..]));
        assert_eq!(analyzer.tickets(), None);
    }

    #[test]
    fn body_stops_at_previous_build() {
        let analyzer = analyze([
            "1.2.3 #42",
            "2016-08-21",
            "* latest",
            "",
            "1.2.2 #41",
            "2016-08-01",
            "* older",
            "OLD-1 older ticket",
        ]);
        assert_eq!(analyzer.comments(), Some(&["latest".to_string()][..]));
        assert_eq!(analyzer.tickets(), None);
    }

    #[test]
    fn body_needs_a_date_line() {
        let analyzer = analyze(["1.0 #1"]);
        assert_eq!(analyzer.comments(), None);
        assert_eq!(analyzer.tickets(), None);
    }

    // ── classify_line ──────────────────────────────────────────────

    #[test]
    fn classify_ticket_with_hyphenated_id() {
        assert_eq!(classify_line("PROJ-123 add feature"), LineKind::Ticket);
    }

    #[test]
    fn classify_bare_ticket_id() {
        assert_eq!(classify_line("PROJ-123"), LineKind::Ticket);
    }

    #[test]
    fn classify_comment() {
        assert_eq!(classify_line("* fixed things"), LineKind::Comment);
        assert_eq!(classify_line("- fixed things"), LineKind::Comment);
    }

    #[test]
    fn classify_ignored() {
        assert_eq!(classify_line(""), LineKind::Ignored);
        assert_eq!(classify_line("*"), LineKind::Ignored);
        assert_eq!(classify_line("  indented"), LineKind::Ignored);
        assert_eq!(classify_line("#hashtag"), LineKind::Ignored);
    }

    #[test]
    fn classify_ticket_with_punctuated_id() {
        assert_eq!(classify_line("PROJ-12: crash on launch"), LineKind::Ticket);
        assert_eq!(classify_line("GH#12 fix"), LineKind::Ticket);
    }

    #[test]
    fn colon_suffixed_ticket_is_extracted() {
        let analyzer = analyze(["1.0 #1", "2016-08-21", "PROJ-12: crash on launch", "* note"]);
        assert_eq!(
            analyzer.tickets(),
            Some(&["PROJ-12: crash on launch".to_string()][..])
        );
        assert_eq!(analyzer.comments(), Some(&["note".to_string()][..]));
    }

    #[test]
    fn numeric_ticket_does_not_end_body() {
        let analyzer = analyze(["1.0 #1", "2016-08-21", "* one", "1234", "* two", "ISSUE1 x"]);
        assert_eq!(
            analyzer.comments(),
            Some(&["one".to_string(), "two".to_string()][..])
        );
        assert_eq!(
            analyzer.tickets(),
            Some(&["1234".to_string(), "ISSUE1 x".to_string()][..])
        );
    }

    #[test]
    fn ticket_id_is_first_token() {
        assert_eq!(ticket_id("ISSUE1 fix bug"), "ISSUE1");
        assert_eq!(ticket_id("ISSUE1"), "ISSUE1");
        assert_eq!(ticket_id("ISSUE1\tfix bug"), "ISSUE1");
        assert_eq!(ticket_id("PROJ-12: crash"), "PROJ-12:");
    }

    // ── property tests ────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn accessors_are_idempotent(body in proptest::collection::vec(".*", 0..12)) {
                let mut lines = vec!["1.2.3 #4".to_string(), "2016-08-21".to_string()];
                lines.extend(body);
                let analyzer = ChangelogAnalyzer::new(lines);
                prop_assert_eq!(analyzer.is_tbd(), analyzer.is_tbd());
                prop_assert_eq!(analyzer.build_version_string(), analyzer.build_version_string());
                prop_assert_eq!(analyzer.build_number(), analyzer.build_number());
                prop_assert_eq!(analyzer.build_date(), analyzer.build_date());
                prop_assert_eq!(analyzer.comments(), analyzer.comments());
                prop_assert_eq!(analyzer.tickets(), analyzer.tickets());
            }

            #[test]
            fn unrecognized_lines_change_nothing(noise in proptest::collection::vec("[#>!=~ ][^\r\n]*", 0..8)) {
                let base = ["1.2.3 #4", "2016-08-21", "* one", "ISSUE-1 fix"];
                let clean = analyze(base);
                let noisy = analyze(base.iter().map(ToString::to_string).chain(noise));
                prop_assert_eq!(clean.comments(), noisy.comments());
                prop_assert_eq!(clean.tickets(), noisy.tickets());
                prop_assert_eq!(clean.build_number(), noisy.build_number());
            }

            #[test]
            fn classification_deterministic(s in ".*") {
                prop_assert_eq!(classify_line(&s), classify_line(&s));
            }
        }
    }
}
