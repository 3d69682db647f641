//! Sessions and the first-fit selection rules that fill them.
//!
//! Selection is greedy: an exact match for the open capacity wins, otherwise
//! the first talk strictly under it. Ties always go to the earliest talk in
//! the pool, so the result depends only on pool order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::talk::Talk;

/// Which half of a track a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Morning,
    Afternoon,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        };
        write!(f, "{s}")
    }
}

/// Ordered talks of one session and their running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    kind: SessionKind,
    talks: Vec<Talk>,
    duration: u32,
}

impl Session {
    pub const fn new(kind: SessionKind) -> Self {
        Self {
            kind,
            talks: Vec::new(),
            duration: 0,
        }
    }

    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn talks(&self) -> &[Talk] {
        &self.talks
    }

    /// Minutes accumulated so far.
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }

    /// Appends a talk and accumulates its length.
    pub fn push(&mut self, talk: Talk) {
        self.duration = self.duration.saturating_add(talk.duration);
        self.talks.push(talk);
    }
}

/// Minutes left before the afternoon reaches each of its bounds.
///
/// `min` goes negative once the lower bound has been passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfternoonRemaining {
    pub min: i64,
    pub max: i64,
}

fn first_index(pool: &[Talk], pred: impl Fn(i64) -> bool) -> Option<usize> {
    pool.iter()
        .position(|talk| pred(i64::from(talk.duration)))
}

/// Picks the pool index of the next morning talk.
///
/// An exact fit for `remaining` wins; otherwise the first shorter talk.
/// Returns `None` when every talk is longer than `remaining`.
pub fn find_talk_to_morning_session(pool: &[Talk], remaining: i64) -> Option<usize> {
    first_index(pool, |d| d == remaining).or_else(|| first_index(pool, |d| d < remaining))
}

/// Picks the pool index of the next afternoon talk.
///
/// Preference order: exact fit to the lower bound, exact fit to the upper
/// bound, shorter than the lower bound, shorter than the upper bound.
pub fn find_talk_to_afternoon_session(
    pool: &[Talk],
    remaining: AfternoonRemaining,
) -> Option<usize> {
    let AfternoonRemaining { min, max } = remaining;
    first_index(pool, |d| d == min)
        .or_else(|| first_index(pool, |d| d == max))
        .or_else(|| first_index(pool, |d| d < min))
        .or_else(|| first_index(pool, |d| d < max))
}
