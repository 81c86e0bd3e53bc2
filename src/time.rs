//! The validated clock time value.

use crate::error::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

pub const MAX_HOUR: i32 = 23;
pub const MAX_MINUTE: i32 = 59;
pub const HOURS_IN_DAY: u8 = 24;
pub const HOURS_IN_HALF_DAY: u8 = 12;

/// A time of day on the 24-hour clock.
///
/// Hours are in `0..=23` and minutes in `0..=59`; both are checked by
/// [`Time::new`] and cannot change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    pub fn new(hour: i32, minute: i32) -> TimeResult<Self> {
        let hour = check_range("Hours", hour, MAX_HOUR)?;
        let minute = check_range("Minutes", minute, MAX_MINUTE)?;
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The hour in 12-hour display form (0 and 12 are kept as-is)
    pub fn twelve_hour(&self) -> u8 {
        to_twelve_hour(self.hour)
    }

    /// The following hour, wrapping 23 to 0
    pub fn next_hour(&self) -> u8 {
        (self.hour + 1) % HOURS_IN_DAY
    }

    /// The following hour in 12-hour display form
    pub fn next_twelve_hour(&self) -> u8 {
        to_twelve_hour(self.next_hour())
    }
}

/// Reduce a 24-hour value to its 12-hour display form. Midnight (0) and
/// noon (12) keep their value; 13-23 become 1-11.
pub fn to_twelve_hour(hour: u8) -> u8 {
    if hour == 0 || hour == HOURS_IN_HALF_DAY {
        hour
    } else {
        hour % HOURS_IN_HALF_DAY
    }
}

fn check_range(unit: &'static str, value: i32, max: i32) -> TimeResult<u8> {
    if !(0..=max).contains(&value) {
        return Err(TimeError::InvalidTime { unit, min: 0, max, value });
    }
    Ok(value as u8)
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_time(s)
    }
}
