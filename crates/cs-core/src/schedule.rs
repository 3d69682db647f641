//! Drives the packer over the whole talk pool to build a conference.
//!
//! # Algorithm Summary
//!
//! 1. Open an empty track.
//! 2. While talks remain, move one talk into the open session of the track
//!    (morning until exactly full, then afternoon until inside its window).
//! 3. When the track is full, append it and open a new one.
//! 4. When no talk fits, apply the configured [`StuckPolicy`].
//! 5. Append the last track if it received any talks.

use crate::config::{ScheduleConfig, StuckPolicy};
use crate::error::{PackError, ScheduleError};
use crate::session::SessionKind;
use crate::talk::Talk;
use crate::track::Track;

/// Where the builder is within the current track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
    FillingMorning,
    FillingAfternoon,
    TrackComplete,
}

impl FillState {
    /// State implied by how full `track` is.
    pub const fn of(track: &Track) -> Self {
        match track.open_session() {
            Some(SessionKind::Morning) => Self::FillingMorning,
            Some(SessionKind::Afternoon) => Self::FillingAfternoon,
            None => Self::TrackComplete,
        }
    }
}

/// Ordered tracks, numbered from 1 when printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conference {
    tracks: Vec<Track>,
}

impl Conference {
    pub const fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of talks across every track.
    pub fn talk_count(&self) -> usize {
        self.tracks.iter().map(Track::talk_count).sum()
    }

    fn seal(&mut self, track: &mut Track, config: &ScheduleConfig) {
        let finished = std::mem::replace(track, Track::new(config.bounds()));
        self.add_track(finished);
    }
}

/// Packs `talks` into as many tracks as the greedy policy needs.
///
/// Talks are consumed in pool order; the result is deterministic for a given
/// input order. Every talk ends up in exactly one session, or an error is
/// returned.
pub fn build_schedule(
    talks: Vec<Talk>,
    config: &ScheduleConfig,
) -> Result<Conference, ScheduleError> {
    config.validate()?;

    let mut pool = talks;
    let mut conference = Conference::new();
    let mut track = Track::new(config.bounds());

    while !pool.is_empty() {
        let state = FillState::of(&track);
        if state == FillState::TrackComplete {
            tracing::debug!(track = conference.tracks().len() + 1, "track complete");
            conference.seal(&mut track, config);
            continue;
        }

        if track.fill_next(&mut pool).is_some() {
            continue;
        }

        let track_number = conference.tracks().len() + 1;
        let session = match state {
            FillState::FillingMorning => SessionKind::Morning,
            _ => SessionKind::Afternoon,
        };

        match config.on_stuck {
            StuckPolicy::SealTrack if !track.is_empty() => {
                tracing::warn!(
                    track = track_number,
                    %session,
                    remaining = %track.remaining(),
                    unplaced = pool.len(),
                    "no talk fits, sealing short track"
                );
                conference.seal(&mut track, config);
            }
            _ => {
                return Err(PackError::NoFeasiblePacking {
                    track: track_number,
                    session,
                    remaining: track.remaining(),
                    unplaced: pool.len(),
                }
                .into());
            }
        }
    }

    if !track.is_empty() {
        conference.add_track(track);
    }

    tracing::info!(
        tracks = conference.tracks().len(),
        talks = conference.talk_count(),
        "schedule built"
    );
    Ok(conference)
}
