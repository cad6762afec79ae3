//! Week-relative start times for recurring shifts.
//!
//! The scheduling API stores a shift start as a number of seconds since
//! Sunday 00:00. Humans write it as a weekday name plus a 24-hour `HH:MM`
//! clock time. This module converts between the two.
//!
//! # Functions
//!
//! - [`parse_clock_time`]: Strict `HH:MM` → [`ClockTime`]
//! - [`weekday_start_to_seconds`]: Weekday name + `HH:MM` → week offset in seconds
//! - [`seconds_to_weekday_start`]: Week offset → weekday index, hour, minute
//!
//! The forward direction validates every component. The inverse is plain
//! integer arithmetic and accepts any offset, including ones past the end
//! of the week (those decode to a weekday index of 7 or more).

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::error::ScheduleError;
use crate::shorthand::{DAY, HOUR, MINUTE, WEEK};

/// The canonical weekday names, Sunday first. A name's position is its
/// weekday index.
pub const DAYS_OF_WEEK: [(&str, Weekday); 7] = [
    ("Sunday", Weekday::Sun),
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
];

/// Canonical name for a weekday index, or `None` outside `0..7`.
pub fn weekday_name(index: u64) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| DAYS_OF_WEEK.get(i))
        .map(|(name, _)| *name)
}

/// Match a full English weekday name, ignoring case. Abbreviations are rejected.
///
/// # Errors
///
/// Returns [`ScheduleError::UnknownWeekday`] if `name` is not one of [`DAYS_OF_WEEK`].
pub fn parse_weekday(name: &str) -> Result<Weekday, ScheduleError> {
    DAYS_OF_WEEK
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
        .map(|(_, weekday)| *weekday)
        .ok_or_else(|| {
            let names: Vec<&str> = DAYS_OF_WEEK.iter().map(|(n, _)| *n).collect();
            ScheduleError::UnknownWeekday(format!("'{name}' is not one of {names:?}"))
        })
}

// ── ClockTime ───────────────────────────────────────────────────────────────

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of hour (0-59).
    pub minute: u32,
}

impl ClockTime {
    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> u64 {
        u64::from(self.hour) * HOUR + u64::from(self.minute) * MINUTE
    }
}

/// Renders as zero-padded `HH:MM`.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clock_time(s)
    }
}

/// Parse a strict 24-hour `HH:MM` time.
///
/// Leading zeros are stripped from each side of the colon before the
/// numeric parse, so `"00:01"`, `"0:1"` and `"007:05"` are all accepted.
/// A side made entirely of zeros (or empty) reads as 0.
///
/// # Errors
///
/// - [`ScheduleError::MalformedTime`] if there is not exactly one colon or
///   either side contains anything other than ASCII digits (this is what
///   rejects `"11:30 PM"`).
/// - [`ScheduleError::OutOfRange`] if the hour is not 0-23 or the minute is not 0-59.
///
/// # Examples
///
/// ```
/// use oncall_schedule::weektime::parse_clock_time;
///
/// let t = parse_clock_time("13:15").unwrap();
/// assert_eq!((t.hour, t.minute), (13, 15));
/// assert!(parse_clock_time("1:15pm").is_err());
/// ```
pub fn parse_clock_time(text: &str) -> Result<ClockTime, ScheduleError> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 {
        return Err(ScheduleError::MalformedTime(format!(
            "'{text}' must be in 24 hour format: HH:MM"
        )));
    }

    let hour = parse_time_component(parts[0]).ok_or_else(|| {
        ScheduleError::MalformedTime(format!(
            "the part of '{text}' before the colon is not a number"
        ))
    })?;
    let minute = parse_time_component(parts[1]).ok_or_else(|| {
        ScheduleError::MalformedTime(format!(
            "the part of '{text}' after the colon is not a number"
        ))
    })?;

    if hour >= 24 {
        return Err(ScheduleError::OutOfRange(format!(
            "hours must be 0 - 23, got {hour} in '{text}'"
        )));
    }
    if minute >= 60 {
        return Err(ScheduleError::OutOfRange(format!(
            "minutes must be 0 - 59, got {minute} in '{text}'"
        )));
    }

    Ok(ClockTime {
        hour: hour as u32,
        minute: minute as u32,
    })
}

/// Strip leading zeros and parse what is left as an unsigned decimal.
///
/// `None` means non-digit content. A digit run too long for `u64` saturates
/// so the range check reports it.
fn parse_time_component(part: &str) -> Option<u64> {
    let digits = match part.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    };
    // `u64::from_str` would also take a leading '+'.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

// ── weekday_start_to_seconds ────────────────────────────────────────────────

/// Convert a weekday name and `HH:MM` start time into seconds since Sunday 00:00.
///
/// The result is `weekday_index * 86400 + hour * 3600 + minute * 60` and is
/// always below one week.
///
/// # Errors
///
/// The time is checked first, so a bad time is reported even when the
/// weekday is also wrong:
/// - [`ScheduleError::MalformedTime`] / [`ScheduleError::OutOfRange`] from [`parse_clock_time`]
/// - [`ScheduleError::UnknownWeekday`] from [`parse_weekday`]
///
/// # Examples
///
/// ```
/// use oncall_schedule::weektime::weekday_start_to_seconds;
///
/// assert_eq!(weekday_start_to_seconds("Sunday", "00:00").unwrap(), 0);
/// assert_eq!(weekday_start_to_seconds("monday", "23:58").unwrap(), 172_680);
/// ```
pub fn weekday_start_to_seconds(weekday: &str, start_time: &str) -> Result<u64, ScheduleError> {
    let time = parse_clock_time(start_time)?;
    let day = parse_weekday(weekday)?;
    Ok(weekday_start_to_seconds_parts(day, time))
}

/// Typed form of [`weekday_start_to_seconds`]; cannot fail.
pub fn weekday_start_to_seconds_parts(weekday: Weekday, time: ClockTime) -> u64 {
    u64::from(weekday.num_days_from_sunday()) * DAY + time.seconds_of_day()
}

// ── seconds_to_weekday_start ────────────────────────────────────────────────

/// A week offset broken back into its day, hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayStart {
    /// Days since Sunday. 7 or more when the offset is past the first week.
    pub weekday_index: u64,
    /// Hour of day (0-23).
    pub hour: u32,
    /// Minute of hour (0-59).
    pub minute: u32,
}

impl WeekdayStart {
    /// Canonical weekday name, or `None` when the index is 7 or more.
    pub fn weekday_name(&self) -> Option<&'static str> {
        weekday_name(self.weekday_index)
    }

    pub fn clock_time(&self) -> ClockTime {
        ClockTime {
            hour: self.hour,
            minute: self.minute,
        }
    }

    /// Whether the offset fell inside the first week.
    pub fn is_within_week(&self) -> bool {
        self.weekday_index < WEEK / DAY
    }
}

/// Split seconds since Sunday 00:00 into weekday index, hour and minute.
///
/// Leftover seconds below a minute are dropped. This never fails: offsets
/// of a week or more simply produce a `weekday_index` of 7 or more, and
/// bounds checking is left to the caller.
///
/// # Examples
///
/// ```
/// use oncall_schedule::weektime::seconds_to_weekday_start;
///
/// let start = seconds_to_weekday_start(172_680);
/// assert_eq!((start.weekday_index, start.hour, start.minute), (1, 23, 58));
/// assert_eq!(start.weekday_name(), Some("Monday"));
/// ```
pub fn seconds_to_weekday_start(offset_seconds: u64) -> WeekdayStart {
    let weekday_index = offset_seconds / DAY;
    let time_in_day = offset_seconds % DAY;
    // Both quotients are below 24 and 60, so the narrowing casts are lossless.
    let hour = (time_in_day / HOUR) as u32;
    let minute = ((time_in_day % HOUR) / MINUTE) as u32;

    WeekdayStart {
        weekday_index,
        hour,
        minute,
    }
}
