//! Error types for oncall-schedule operations.

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Malformed time: {0}")]
    MalformedTime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Malformed duration: {0}")]
    MalformedDuration(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),
}

/// The variant of a [`ScheduleError`] without its detail string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedTime,
    OutOfRange,
    UnknownWeekday,
    MalformedDuration,
    InvalidId,
    InvalidTimezone,
    InvalidConfig,
    InvalidSchedule,
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::MalformedTime(_) => ErrorKind::MalformedTime,
            ScheduleError::OutOfRange(_) => ErrorKind::OutOfRange,
            ScheduleError::UnknownWeekday(_) => ErrorKind::UnknownWeekday,
            ScheduleError::MalformedDuration(_) => ErrorKind::MalformedDuration,
            ScheduleError::InvalidId(_) => ErrorKind::InvalidId,
            ScheduleError::InvalidTimezone(_) => ErrorKind::InvalidTimezone,
            ScheduleError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            ScheduleError::InvalidSchedule(_) => ErrorKind::InvalidSchedule,
        }
    }

    /// The human-readable detail attached to the error.
    pub fn detail(&self) -> &str {
        match self {
            ScheduleError::MalformedTime(d)
            | ScheduleError::OutOfRange(d)
            | ScheduleError::UnknownWeekday(d)
            | ScheduleError::MalformedDuration(d)
            | ScheduleError::InvalidId(d)
            | ScheduleError::InvalidTimezone(d)
            | ScheduleError::InvalidConfig(d)
            | ScheduleError::InvalidSchedule(d) => d,
        }
    }

    /// Prefix the detail with `context`, keeping the kind.
    pub fn with_context(self, context: impl fmt::Display) -> Self {
        let wrap = |d: String| format!("{context}: {d}");
        match self {
            ScheduleError::MalformedTime(d) => ScheduleError::MalformedTime(wrap(d)),
            ScheduleError::OutOfRange(d) => ScheduleError::OutOfRange(wrap(d)),
            ScheduleError::UnknownWeekday(d) => ScheduleError::UnknownWeekday(wrap(d)),
            ScheduleError::MalformedDuration(d) => ScheduleError::MalformedDuration(wrap(d)),
            ScheduleError::InvalidId(d) => ScheduleError::InvalidId(wrap(d)),
            ScheduleError::InvalidTimezone(d) => ScheduleError::InvalidTimezone(wrap(d)),
            ScheduleError::InvalidConfig(d) => ScheduleError::InvalidConfig(wrap(d)),
            ScheduleError::InvalidSchedule(d) => ScheduleError::InvalidSchedule(wrap(d)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
