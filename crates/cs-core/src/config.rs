//! Session bounds and wall-clock anchors used to pack and print a schedule.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What the builder does when no remaining talk fits the open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StuckPolicy {
    /// Stop and report [`PackError::NoFeasiblePacking`](crate::PackError).
    #[default]
    Fail,
    /// Close the short track and keep packing into a fresh one.
    SealTrack,
}

impl StuckPolicy {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::SealTrack => "seal-track",
        }
    }
}

impl fmt::Display for StuckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StuckPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Self::Fail),
            "seal-track" => Ok(Self::SealTrack),
            _ => Err(format!("unknown stuck policy: {s}")),
        }
    }
}

/// Capacity of the two sessions of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBounds {
    /// The morning is full only at exactly this many minutes.
    pub morning: u32,
    /// The afternoon is full anywhere in `afternoon_min..=afternoon_max`.
    pub afternoon_min: u32,
    pub afternoon_max: u32,
}

impl Default for SessionBounds {
    fn default() -> Self {
        ScheduleConfig::default().bounds()
    }
}

/// Immutable scheduling constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub morning_minutes: u32,
    pub afternoon_min_minutes: u32,
    pub afternoon_max_minutes: u32,

    pub morning_start: NaiveTime,
    pub lunch_start: NaiveTime,
    pub afternoon_start: NaiveTime,

    /// Earliest time the networking event may begin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking_not_before: Option<NaiveTime>,

    pub on_stuck: StuckPolicy,
}

fn clock(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            morning_minutes: 180,
            afternoon_min_minutes: 180,
            afternoon_max_minutes: 240,
            morning_start: clock(9, 0),
            lunch_start: clock(12, 0),
            afternoon_start: clock(13, 0),
            networking_not_before: None,
            on_stuck: StuckPolicy::Fail,
        }
    }
}

impl ScheduleConfig {
    /// Session capacities for the packer.
    #[must_use]
    pub const fn bounds(&self) -> SessionBounds {
        SessionBounds {
            morning: self.morning_minutes,
            afternoon_min: self.afternoon_min_minutes,
            afternoon_max: self.afternoon_max_minutes,
        }
    }

    /// Rejects bounds the packer cannot satisfy.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.morning_minutes == 0 {
            return Err(ConfigError::InvalidConfig {
                field: "morning_minutes",
                reason: "must be greater than zero",
            });
        }
        if self.afternoon_min_minutes == 0 {
            return Err(ConfigError::InvalidConfig {
                field: "afternoon_min_minutes",
                reason: "must be greater than zero",
            });
        }
        if self.afternoon_min_minutes > self.afternoon_max_minutes {
            return Err(ConfigError::InvalidConfig {
                field: "afternoon_max_minutes",
                reason: "must not be less than afternoon_min_minutes",
            });
        }
        Ok(())
    }
}
