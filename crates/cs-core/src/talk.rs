//! Talk records parsed from raw input lines.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TalkParseError;

/// Marker that turns a line into a lightning talk.
pub const LIGHTNING_MARKER: &str = "lightning";

/// Fixed length of a lightning talk in minutes.
pub const LIGHTNING_MINUTES: u32 = 5;

/// First run of ASCII digits in a line; the title is everything before it.
static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// A single conference talk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Talk {
    /// Title exactly as split from the line, trailing whitespace included.
    pub title: String,

    /// Length in minutes.
    pub duration: u32,

    /// Parsed from a lightning line rather than a timed one.
    #[serde(default)]
    pub lightning: bool,
}

impl Talk {
    /// Creates a talk directly from its parts.
    pub fn new(title: impl Into<String>, duration: u32) -> Self {
        Self {
            title: title.into(),
            duration,
            lightning: false,
        }
    }

    /// Creates a lightning talk of [`LIGHTNING_MINUTES`].
    pub fn lightning(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: LIGHTNING_MINUTES,
            lightning: true,
        }
    }

    /// Returns true when the raw line carries the lightning marker.
    pub fn is_lightning(line: &str) -> bool {
        line.contains(LIGHTNING_MARKER)
    }

    /// Parses one raw input line.
    ///
    /// Lightning lines keep the text before the marker as the title and last
    /// [`LIGHTNING_MINUTES`]. Any other line is split at its first run of
    /// digits, and its duration is every digit in the line read as one
    /// integer, so `"Talk 45min"` lasts 45 minutes.
    ///
    /// The returned error carries no line number; [`parse_talks`] adds one.
    pub fn parse(line: &str) -> Result<Self, TalkParseError> {
        let malformed = || TalkParseError::MalformedTalkRecord {
            line_number: None,
            line: line.to_string(),
        };

        if Self::is_lightning(line) {
            let title = line.split(LIGHTNING_MARKER).next().unwrap_or_default();
            return Ok(Self::lightning(title));
        }

        let first_run = DIGIT_RUN_RE.find(line).ok_or_else(malformed)?;
        let digits: String = line.chars().filter(char::is_ascii_digit).collect();
        let duration = digits.parse::<u32>().map_err(|_| malformed())?;

        Ok(Self::new(&line[..first_run.start()], duration))
    }
}

impl FromStr for Talk {
    type Err = TalkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats a talk back into its input form.
impl fmt::Display for Talk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lightning {
            write!(f, "{}{LIGHTNING_MARKER}", self.title)
        } else {
            write!(f, "{}{}min", self.title, self.duration)
        }
    }
}

/// Parses a whole talks document, one talk per line.
///
/// Lines are numbered from 1. A trailing newline does not add a record, but
/// blank lines anywhere else are malformed.
pub fn parse_talks(text: &str) -> Result<Vec<Talk>, TalkParseError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| Talk::parse(line).map_err(|err| err.at_line(idx + 1)))
        .collect()
}
