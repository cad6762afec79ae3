//! # oncall-schedule
//!
//! Weekly shift encoding for on-call scheduling services.
//!
//! The scheduling API describes a recurring shift as two integers: seconds
//! since Sunday 00:00 and a length in seconds. People describe it as
//! "Monday at 09:30 for 1h30m". This crate converts between the two and
//! builds the team, roster and schedule payloads around them.
//!
//! ## Modules
//!
//! - [`weektime`]: Weekday name + `HH:MM` ↔ seconds since the start of the week
//! - [`shorthand`]: Duration shorthand (`1w2d3h4m5s`) ↔ seconds
//! - [`schedule`]: Basic and advanced schedule declarations ↔ API schedule payloads
//! - [`team`] / [`roster`]: Team and roster declarations ↔ API payloads
//! - [`ids`]: `team/roster` and `team/roster/role` resource keys
//! - [`model`]: Scheduling API payload types
//! - [`config`]: Service endpoint and credentials resolution
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod ids;
pub mod model;
pub mod roster;
pub mod schedule;
pub mod shorthand;
pub mod team;
pub mod weektime;

pub use config::{AuthMethod, ProviderConfig, ProviderSettings};
pub use error::{ErrorKind, ScheduleError};
pub use ids::{RosterId, ScheduleId};
pub use model::{Roster, Schedule, ScheduleEvent, ScheduleScheduler, Team, TeamConfig, User};
pub use roster::RosterSpec;
pub use schedule::{
    AdvancedScheduleSpec, BasicScheduleSpec, Role, RotateFrequency, ScheduleSpec,
    SchedulingAlgorithm, ShiftSpec,
};
pub use shorthand::{format_duration_shorthand, parse_duration_shorthand};
pub use team::TeamSpec;
pub use weektime::{
    parse_clock_time, seconds_to_weekday_start, weekday_start_to_seconds, ClockTime,
    WeekdayStart, DAYS_OF_WEEK,
};
