//! Team resource: declared configuration ↔ API payloads.

use std::collections::BTreeSet;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::model::{Team, TeamConfig};

/// A team as declared by the user. The team's resource id is its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    /// IANA timezone the service schedules this team's shifts in.
    pub scheduling_timezone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub slack_channel: String,
    #[serde(default)]
    pub iris_plan: String,
    #[serde(default)]
    pub admins: BTreeSet<String>,
}

impl TeamSpec {
    /// Validate and build the create/update body.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidConfig`] listing every empty required
    /// field, or [`ScheduleError::InvalidTimezone`] if the timezone is not a
    /// known IANA name.
    pub fn to_team_config(&self) -> Result<TeamConfig, ScheduleError> {
        let mut problems = Vec::new();
        if self.name.is_empty() {
            problems.push("you must specify a non-empty name");
        }
        if self.scheduling_timezone.is_empty() {
            problems.push("you must specify a non-empty scheduling_timezone");
        }
        if !problems.is_empty() {
            return Err(ScheduleError::InvalidConfig(problems.join("; ")));
        }

        parse_timezone(&self.scheduling_timezone)?;

        let config = TeamConfig {
            name: self.name.clone(),
            scheduling_timezone: self.scheduling_timezone.clone(),
            email: self.email.clone(),
            slack_channel: self.slack_channel.clone(),
            iris_plan: self.iris_plan.clone(),
        };
        trace!(team = %config.name, "built team config");
        Ok(config)
    }

    /// Read a team back from the API.
    pub fn from_team(team: &Team) -> Self {
        debug!(team = %team.name, admins = team.admins.len(), "reading team");
        TeamSpec {
            name: team.name.clone(),
            scheduling_timezone: team.scheduling_timezone.clone(),
            email: team.email.clone(),
            slack_channel: team.slack_channel.clone(),
            iris_plan: team.iris_plan.clone(),
            admins: team.admins.iter().map(|a| a.name.clone()).collect(),
        }
    }
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, ScheduleError> {
    s.parse::<Tz>()
        .map_err(|_| ScheduleError::InvalidTimezone(format!("'{s}'")))
}
