//! Error types for parsing, packing, and configuration.

use thiserror::Error;

use crate::session::SessionKind;

/// A talk line that could not be turned into a [`Talk`](crate::Talk).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TalkParseError {
    /// The line has neither a lightning marker nor a usable duration.
    ///
    /// `line_number` is 1-based and only known when parsing a whole document.
    #[error(
        "malformed talk record{}: {line:?}",
        .line_number.map_or_else(String::new, |n| format!(" on line {n}"))
    )]
    MalformedTalkRecord {
        line_number: Option<usize>,
        line: String,
    },
}

impl TalkParseError {
    /// Re-labels the error with the line it came from.
    #[must_use]
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            Self::MalformedTalkRecord { line, .. } => {
                Self::MalformedTalkRecord {
                    line_number: Some(line_number),
                    line,
                }
            }
        }
    }
}

/// Capacity still open in a session when packing got stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    /// Minutes needed to fill the morning exactly.
    Exact(i64),
    /// Minutes needed to reach the lower and upper afternoon bounds.
    Window { min: i64, max: i64 },
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(minutes) => write!(f, "{minutes} min"),
            Self::Window { min, max } => write!(f, "{min}..={max} min"),
        }
    }
}

/// The greedy packer could not place any remaining talk.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error(
        "no feasible packing: track {track} {session} session needs {remaining} \
         but none of the {unplaced} remaining talks fit"
    )]
    NoFeasiblePacking {
        /// 1-based track number.
        track: usize,
        session: SessionKind,
        remaining: Remaining,
        unplaced: usize,
    },
}

/// Schedule configuration that cannot produce a valid schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

/// Anything that stops a schedule from being built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pack(#[from] PackError),
}
