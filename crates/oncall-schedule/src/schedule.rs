//! Roster schedules: declared shifts ↔ API schedule payloads.
//!
//! Two declaration styles exist:
//!
//! - [`BasicScheduleSpec`]: one rotation that starts at a weekday and time
//!   and lasts a week or a fortnight. Sent with `advanced_mode = 0`.
//! - [`AdvancedScheduleSpec`]: an explicit list of shifts, each with its
//!   own start and shorthand duration. Sent with `advanced_mode = 1`.
//!
//! Reading a payload back renders each event start as a weekday name plus
//! zero-padded `HH:MM` and each duration as canonical shorthand, so a read
//! may normalize what the user wrote (`"monday"` → `"Monday"`, `"90m"` →
//! `"1h30m"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::ids::{RosterId, ScheduleId};
use crate::model::{Schedule, ScheduleEvent, ScheduleScheduler};
use crate::shorthand::{
    format_duration_shorthand, parse_duration_shorthand, FORTNIGHT, WEEK,
};
use crate::weektime::{seconds_to_weekday_start, weekday_start_to_seconds};

/// How many days ahead the service fills in a schedule unless told otherwise.
pub const DEFAULT_AUTO_POPULATE_DAYS: u32 = 21;

fn default_auto_populate_days() -> u32 {
    DEFAULT_AUTO_POPULATE_DAYS
}

// ── Enumerated fields ───────────────────────────────────────────────────────

/// On-call role a schedule fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Shadow,
    Manager,
    Vacation,
    Unavailable,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Shadow,
        Role::Manager,
        Role::Vacation,
        Role::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Shadow => "shadow",
            Role::Manager => "manager",
            Role::Vacation => "vacation",
            Role::Unavailable => "unavailable",
        }
    }
}

/// Algorithm the service uses to assign roster members to events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingAlgorithm {
    #[default]
    Default,
    RoundRobin,
}

impl SchedulingAlgorithm {
    pub const ALL: [SchedulingAlgorithm; 2] =
        [SchedulingAlgorithm::Default, SchedulingAlgorithm::RoundRobin];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingAlgorithm::Default => "default",
            SchedulingAlgorithm::RoundRobin => "round-robin",
        }
    }
}

/// Rotation length of a basic schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RotateFrequency {
    #[default]
    Weekly,
    BiWeekly,
}

impl RotateFrequency {
    pub const ALL: [RotateFrequency; 2] = [RotateFrequency::Weekly, RotateFrequency::BiWeekly];

    pub fn as_str(&self) -> &'static str {
        match self {
            RotateFrequency::Weekly => "weekly",
            RotateFrequency::BiWeekly => "bi-weekly",
        }
    }

    /// Length of one rotation in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            RotateFrequency::Weekly => WEEK,
            RotateFrequency::BiWeekly => FORTNIGHT,
        }
    }

    /// Any duration other than a fortnight reads back as weekly.
    pub fn from_seconds(seconds: u64) -> Self {
        if seconds == FORTNIGHT {
            RotateFrequency::BiWeekly
        } else {
            RotateFrequency::Weekly
        }
    }
}

/// Look `s` up among `all` by exact string, naming the allowed set on failure.
fn parse_one_of<T: Copy>(
    s: &str,
    field: &str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
) -> Result<T, ScheduleError> {
    all.iter().copied().find(|v| as_str(v) == s).ok_or_else(|| {
        let allowed: Vec<&str> = all.iter().map(as_str).collect();
        ScheduleError::InvalidConfig(format!("{field} '{s}' must be one of {allowed:?}"))
    })
}

impl FromStr for Role {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_one_of(s, "role", &Role::ALL, Role::as_str)
    }
}

impl FromStr for SchedulingAlgorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_one_of(
            s,
            "scheduling algorithm",
            &SchedulingAlgorithm::ALL,
            SchedulingAlgorithm::as_str,
        )
    }
}

impl FromStr for RotateFrequency {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_one_of(
            s,
            "rotate frequency",
            &RotateFrequency::ALL,
            RotateFrequency::as_str,
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RotateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Shared helpers ──────────────────────────────────────────────────────────

/// Render an event start as `(weekday name, "HH:MM")`.
///
/// The codec accepts offsets past the end of the week; a declared schedule
/// must name a day, so those are rejected here.
fn describe_start(start: u64) -> Result<(String, String), ScheduleError> {
    let decoded = seconds_to_weekday_start(start);
    if !decoded.is_within_week() {
        return Err(ScheduleError::InvalidSchedule(format!(
            "event start {start} is past the end of the week (day index {})",
            decoded.weekday_index
        )));
    }
    let day = decoded.weekday_name().unwrap_or_default();
    Ok((day.to_string(), decoded.clock_time().to_string()))
}

/// Pull role and algorithm out of an API payload, as read-side errors.
fn read_common(schedule: &Schedule) -> Result<(Role, SchedulingAlgorithm), ScheduleError> {
    let as_read_error = |e: ScheduleError| ScheduleError::InvalidSchedule(e.detail().to_string());
    let role = schedule.role.parse::<Role>().map_err(as_read_error)?;
    let algorithm = schedule
        .scheduler
        .name
        .parse::<SchedulingAlgorithm>()
        .map_err(as_read_error)?;
    Ok((role, algorithm))
}

fn schedule_id(roster_id: &str, role: Role) -> Result<ScheduleId, ScheduleError> {
    let roster: RosterId = roster_id
        .parse()
        .map_err(|e: ScheduleError| e.with_context("invalid roster_id"))?;
    Ok(roster.schedule(role.as_str()))
}

// ── BasicScheduleSpec ───────────────────────────────────────────────────────

/// A single rotation starting at a fixed point in the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicScheduleSpec {
    pub role: Role,
    /// `team/roster` this schedule belongs to.
    pub roster_id: String,
    #[serde(default = "default_auto_populate_days")]
    pub auto_populate_days: u32,
    /// Full weekday name, any case.
    pub start_day_of_week: String,
    /// 24-hour `HH:MM`.
    pub start_time: String,
    #[serde(default)]
    pub rotate_frequency: RotateFrequency,
    #[serde(default)]
    pub scheduling_algorithm: SchedulingAlgorithm,
}

impl BasicScheduleSpec {
    pub fn schedule_id(&self) -> Result<ScheduleId, ScheduleError> {
        schedule_id(&self.roster_id, self.role)
    }

    /// Build the API payload: one event of one rotation length.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidId`] for a bad `roster_id`, otherwise whatever
    /// [`weekday_start_to_seconds`] reports for the start day and time.
    pub fn to_schedule(&self) -> Result<Schedule, ScheduleError> {
        let id = self.schedule_id()?;
        trace!(schedule = %id, "building basic schedule");

        let start = weekday_start_to_seconds(&self.start_day_of_week, &self.start_time)
            .map_err(|e| e.with_context("parsing start weekday and time"))?;

        Ok(Schedule {
            role: self.role.to_string(),
            team: id.team,
            roster: id.roster,
            auto_populate_threshold: self.auto_populate_days,
            advanced_mode: 0,
            events: vec![ScheduleEvent {
                start,
                duration: self.rotate_frequency.seconds(),
            }],
            scheduler: ScheduleScheduler {
                name: self.scheduling_algorithm.to_string(),
            },
        })
    }

    /// Read a basic schedule back from the API.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidSchedule`] if the payload does not have exactly
    /// one event, names an unknown role or algorithm, or its event starts
    /// past the end of the week.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, ScheduleError> {
        let [event] = schedule.events.as_slice() else {
            return Err(ScheduleError::InvalidSchedule(format!(
                "the schedule is not a basic schedule as it has {} events instead of exactly one",
                schedule.events.len()
            )));
        };
        let (role, scheduling_algorithm) = read_common(schedule)?;
        let (start_day_of_week, start_time) = describe_start(event.start)?;

        debug!(
            team = %schedule.team,
            roster = %schedule.roster,
            role = %role,
            start = event.start,
            duration = event.duration,
            "read basic schedule"
        );

        Ok(BasicScheduleSpec {
            role,
            roster_id: RosterId::new(schedule.team.clone(), schedule.roster.clone()).to_string(),
            auto_populate_days: schedule.auto_populate_threshold,
            start_day_of_week,
            start_time,
            rotate_frequency: RotateFrequency::from_seconds(event.duration),
            scheduling_algorithm,
        })
    }
}

// ── AdvancedScheduleSpec ────────────────────────────────────────────────────

/// One shift of an advanced schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSpec {
    /// Full weekday name, any case.
    pub start_day_of_week: String,
    /// 24-hour `HH:MM`.
    pub start_time: String,
    /// Duration shorthand, e.g. `24h`, `8h`, `1h30m`, `3d`.
    pub duration: String,
}

impl ShiftSpec {
    pub fn to_event(&self) -> Result<ScheduleEvent, ScheduleError> {
        let start = weekday_start_to_seconds(&self.start_day_of_week, &self.start_time)?;
        let duration = parse_duration_shorthand(&self.duration)?;
        Ok(ScheduleEvent { start, duration })
    }
}

/// An explicit list of shifts making up one rotation of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedScheduleSpec {
    pub role: Role,
    /// `team/roster` this schedule belongs to.
    pub roster_id: String,
    #[serde(default = "default_auto_populate_days")]
    pub auto_populate_days: u32,
    #[serde(default)]
    pub scheduling_algorithm: SchedulingAlgorithm,
    /// At least one shift is required.
    pub shifts: Vec<ShiftSpec>,
}

impl AdvancedScheduleSpec {
    pub fn schedule_id(&self) -> Result<ScheduleId, ScheduleError> {
        schedule_id(&self.roster_id, self.role)
    }

    /// Build the API payload, one event per shift in declaration order.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidId`] for a bad `roster_id` and
    /// [`ScheduleError::InvalidConfig`] when there are no shifts; otherwise
    /// the first shift that fails reports its codec error, prefixed with its
    /// position.
    pub fn to_schedule(&self) -> Result<Schedule, ScheduleError> {
        let id = self.schedule_id()?;
        if self.shifts.is_empty() {
            return Err(ScheduleError::InvalidConfig(format!(
                "schedule {id} needs at least one shift"
            )));
        }
        trace!(schedule = %id, shifts = self.shifts.len(), "building advanced schedule");

        let events = self
            .shifts
            .iter()
            .enumerate()
            .map(|(i, shift)| {
                shift
                    .to_event()
                    .map_err(|e| e.with_context(format!("shift {}", i + 1)))
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;

        Ok(Schedule {
            role: self.role.to_string(),
            team: id.team,
            roster: id.roster,
            auto_populate_threshold: self.auto_populate_days,
            advanced_mode: 1,
            events,
            scheduler: ScheduleScheduler {
                name: self.scheduling_algorithm.to_string(),
            },
        })
    }

    /// Read an advanced schedule back from the API.
    ///
    /// Durations come back in canonical shorthand. A zero-length event reads
    /// back as an empty duration, which [`Self::to_schedule`] then rejects.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidSchedule`] for an unknown role or algorithm, or
    /// an event that starts past the end of the week.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, ScheduleError> {
        let (role, scheduling_algorithm) = read_common(schedule)?;

        let shifts = schedule
            .events
            .iter()
            .map(|event| {
                let (start_day_of_week, start_time) = describe_start(event.start)?;
                Ok(ShiftSpec {
                    start_day_of_week,
                    start_time,
                    duration: format_duration_shorthand(event.duration),
                })
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;

        debug!(
            team = %schedule.team,
            roster = %schedule.roster,
            role = %role,
            shifts = shifts.len(),
            "read advanced schedule"
        );

        Ok(AdvancedScheduleSpec {
            role,
            roster_id: RosterId::new(schedule.team.clone(), schedule.roster.clone()).to_string(),
            auto_populate_days: schedule.auto_populate_threshold,
            scheduling_algorithm,
            shifts,
        })
    }
}

// ── ScheduleSpec ────────────────────────────────────────────────────────────

/// Either schedule style, tagged by `"kind"` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScheduleSpec {
    Basic(BasicScheduleSpec),
    Advanced(AdvancedScheduleSpec),
}

impl ScheduleSpec {
    pub fn schedule_id(&self) -> Result<ScheduleId, ScheduleError> {
        match self {
            ScheduleSpec::Basic(spec) => spec.schedule_id(),
            ScheduleSpec::Advanced(spec) => spec.schedule_id(),
        }
    }

    pub fn to_schedule(&self) -> Result<Schedule, ScheduleError> {
        match self {
            ScheduleSpec::Basic(spec) => spec.to_schedule(),
            ScheduleSpec::Advanced(spec) => spec.to_schedule(),
        }
    }

    /// Read a payload back in the style its `advanced_mode` flag says it was
    /// written in.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, ScheduleError> {
        if schedule.advanced_mode == 0 {
            BasicScheduleSpec::from_schedule(schedule).map(ScheduleSpec::Basic)
        } else {
            AdvancedScheduleSpec::from_schedule(schedule).map(ScheduleSpec::Advanced)
        }
    }
}
