//! A conference track: one morning and one afternoon session.

use crate::config::SessionBounds;
use crate::error::Remaining;
use crate::session::{
    AfternoonRemaining, Session, SessionKind, find_talk_to_afternoon_session,
    find_talk_to_morning_session,
};
use crate::talk::Talk;

/// One day of talks, filled morning first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    bounds: SessionBounds,
    morning: Session,
    afternoon: Session,
}

impl Default for Track {
    fn default() -> Self {
        Self::new(SessionBounds::default())
    }
}

impl Track {
    pub const fn new(bounds: SessionBounds) -> Self {
        Self {
            bounds,
            morning: Session::new(SessionKind::Morning),
            afternoon: Session::new(SessionKind::Afternoon),
        }
    }

    pub const fn morning(&self) -> &Session {
        &self.morning
    }

    pub const fn afternoon(&self) -> &Session {
        &self.afternoon
    }

    /// Minutes missing for the morning to be exactly full.
    pub fn time_remaining_to_morning_full(&self) -> i64 {
        i64::from(self.bounds.morning) - i64::from(self.morning.duration())
    }

    /// Minutes missing to each afternoon bound.
    pub fn time_remaining_to_afternoon_full(&self) -> AfternoonRemaining {
        let current = i64::from(self.afternoon.duration());
        AfternoonRemaining {
            min: i64::from(self.bounds.afternoon_min) - current,
            max: i64::from(self.bounds.afternoon_max) - current,
        }
    }

    pub fn find_talk_to_morning_session(&self, pool: &[Talk]) -> Option<usize> {
        find_talk_to_morning_session(pool, self.time_remaining_to_morning_full())
    }

    pub fn find_talk_to_afternoon_session(&self, pool: &[Talk]) -> Option<usize> {
        find_talk_to_afternoon_session(pool, self.time_remaining_to_afternoon_full())
    }

    /// The morning only counts as full at its exact capacity.
    pub const fn is_morning_full(&self) -> bool {
        self.morning.duration() == self.bounds.morning
    }

    pub const fn is_afternoon_full(&self) -> bool {
        let current = self.afternoon.duration();
        self.bounds.afternoon_min <= current && current <= self.bounds.afternoon_max
    }

    pub const fn is_full(&self) -> bool {
        self.is_morning_full() && self.is_afternoon_full()
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    pub fn talk_count(&self) -> usize {
        self.morning.talks().len() + self.afternoon.talks().len()
    }

    /// Appends a talk to `kind` without running selection.
    pub fn add_talk(&mut self, kind: SessionKind, talk: Talk) {
        match kind {
            SessionKind::Morning => self.morning.push(talk),
            SessionKind::Afternoon => self.afternoon.push(talk),
        }
    }

    /// The session still accepting talks, if any.
    pub const fn open_session(&self) -> Option<SessionKind> {
        if !self.is_morning_full() {
            Some(SessionKind::Morning)
        } else if !self.is_afternoon_full() {
            Some(SessionKind::Afternoon)
        } else {
            None
        }
    }

    /// Capacity left in the open session, as reported when packing stalls.
    pub fn remaining(&self) -> Remaining {
        match self.open_session() {
            Some(SessionKind::Morning) => Remaining::Exact(self.time_remaining_to_morning_full()),
            Some(SessionKind::Afternoon) | None => {
                let AfternoonRemaining { min, max } = self.time_remaining_to_afternoon_full();
                Remaining::Window { min, max }
            }
        }
    }

    /// Moves one talk from `pool` into the open session.
    ///
    /// Returns the session that received it, or `None` if the track is full
    /// or no talk in the pool fits.
    pub fn fill_next(&mut self, pool: &mut Vec<Talk>) -> Option<SessionKind> {
        let kind = self.open_session()?;
        let index = match kind {
            SessionKind::Morning => self.find_talk_to_morning_session(pool)?,
            SessionKind::Afternoon => self.find_talk_to_afternoon_session(pool)?,
        };
        let talk = pool.remove(index);
        tracing::debug!(
            session = %kind,
            title = %talk.title.trim_end(),
            minutes = talk.duration,
            "placed talk"
        );
        self.add_talk(kind, talk);
        Some(kind)
    }
}
