//! Wall-clock timing and printable output for a packed conference.

use std::fmt::{self, Write};

use chrono::{Duration, NaiveTime};
use serde::{Serialize, Serializer};

use crate::config::ScheduleConfig;
use crate::schedule::Conference;
use crate::talk::Talk;

/// Formats a time as zero-padded 12-hour clock, e.g. `01:00PM`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M%p").to_string()
}

/// A start time that prints and serializes in schedule form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Clock(pub NaiveTime);

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.0))
    }
}

impl Serialize for Clock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A talk with its start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub start: Clock,
    pub title: String,
    pub minutes: u32,
}

/// Timed entries of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackPlan {
    /// 1-based track number.
    pub track: usize,
    pub morning: Vec<Slot>,
    pub lunch: Clock,
    pub afternoon: Vec<Slot>,
    pub networking: Clock,
}

/// Lays talks end to end from `start`, returning the slots and the end time.
fn lay_out(start: NaiveTime, talks: &[Talk]) -> (Vec<Slot>, NaiveTime) {
    let mut clock = start;
    let slots = talks
        .iter()
        .map(|talk| {
            let slot = Slot {
                start: Clock(clock),
                title: talk.title.clone(),
                minutes: talk.duration,
            };
            clock += Duration::minutes(i64::from(talk.duration));
            slot
        })
        .collect();
    (slots, clock)
}

/// Computes the start time of every entry in the conference.
///
/// The networking event starts when the last afternoon talk ends, moved up
/// to `networking_not_before` when that is configured and later.
pub fn plan_schedule(conference: &Conference, config: &ScheduleConfig) -> Vec<TrackPlan> {
    conference
        .tracks()
        .iter()
        .enumerate()
        .map(|(idx, track)| {
            let (morning, _) = lay_out(config.morning_start, track.morning().talks());
            let (afternoon, end) = lay_out(config.afternoon_start, track.afternoon().talks());
            let networking = config
                .networking_not_before
                .map_or(end, |floor| end.max(floor));

            TrackPlan {
                track: idx + 1,
                morning,
                lunch: Clock(config.lunch_start),
                afternoon,
                networking: Clock(networking),
            }
        })
        .collect()
}

/// Writes the printable schedule, a blank line after every track.
pub fn write_schedule<W: Write>(out: &mut W, plans: &[TrackPlan]) -> fmt::Result {
    for plan in plans {
        writeln!(out, "Track {}:", plan.track)?;
        for slot in &plan.morning {
            writeln!(out, "{} {}", slot.start, slot.title)?;
        }
        writeln!(out, "{} Lunch", plan.lunch)?;
        for slot in &plan.afternoon {
            writeln!(out, "{} {}", slot.start, slot.title)?;
        }
        writeln!(out, "{} Networking Event", plan.networking)?;
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSchedule<'a> {
    tracks: &'a [TrackPlan],
}

/// Formats the schedule as pretty-printed JSON.
pub fn format_schedule_json(plans: &[TrackPlan]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonSchedule { tracks: plans })
}
