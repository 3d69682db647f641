//! Core domain logic for the conference scheduler.
//!
//! This crate contains:
//! - Talk parsing: turning raw lines into titled, timed talks
//! - Session packing: first-fit selection of talks into morning and afternoon sessions
//! - Schedule building: driving the packer into a sequence of tracks
//! - Rendering: start times and printable or JSON output

mod config;
mod error;
mod render;
mod schedule;
mod session;
mod talk;
mod track;

pub use config::{ScheduleConfig, SessionBounds, StuckPolicy};
pub use error::{ConfigError, PackError, Remaining, ScheduleError, TalkParseError};
pub use render::{
    Clock, Slot, TrackPlan, format_clock, format_schedule_json, plan_schedule, write_schedule,
};
pub use schedule::{Conference, FillState, build_schedule};
pub use session::{
    AfternoonRemaining, Session, SessionKind, find_talk_to_afternoon_session,
    find_talk_to_morning_session,
};
pub use talk::{LIGHTNING_MARKER, LIGHTNING_MINUTES, Talk, parse_talks};
pub use track::Track;
