//! Composite resource keys.
//!
//! Teams are keyed by their bare name. Rosters live under a team and are
//! keyed `team/roster`; schedules are keyed `team/roster/role`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ScheduleError;

/// `team/roster`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterId {
    pub team: String,
    pub roster: String,
}

impl RosterId {
    pub fn new(team: impl Into<String>, roster: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            roster: roster.into(),
        }
    }

    /// The schedule key for `role` within this roster.
    pub fn schedule(&self, role: impl Into<String>) -> ScheduleId {
        ScheduleId {
            team: self.team.clone(),
            roster: self.roster.clone(),
            role: role.into(),
        }
    }
}

impl fmt::Display for RosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.team, self.roster)
    }
}

impl FromStr for RosterId {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let (team, roster) = match parts.as_slice() {
            [team, roster] => (*team, *roster),
            [_] => {
                warn!(id = s, "roster id did not match expected team/roster format");
                return Err(ScheduleError::InvalidId(format!(
                    "only team name found in roster id '{s}'"
                )));
            }
            _ => {
                warn!(id = s, "roster id did not match expected team/roster format");
                return Err(ScheduleError::InvalidId(format!(
                    "unparseable roster id '{s}' (should be team/roster)"
                )));
            }
        };

        if team.is_empty() || roster.is_empty() {
            return Err(ScheduleError::InvalidId(format!(
                "roster id '{s}' did not specify both team and roster"
            )));
        }
        Ok(RosterId::new(team, roster))
    }
}

/// `team/roster/role`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId {
    pub team: String,
    pub roster: String,
    pub role: String,
}

impl ScheduleId {
    pub fn roster_id(&self) -> RosterId {
        RosterId::new(self.team.clone(), self.roster.clone())
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.team, self.roster, self.role)
    }
}

impl FromStr for ScheduleId {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        let [team, roster, role] = parts.as_slice() else {
            warn!(id = s, "schedule id did not match expected team/roster/role format");
            return Err(ScheduleError::InvalidId(format!(
                "unparseable roster schedule id '{s}' (should be team/roster/role)"
            )));
        };

        if team.is_empty() || roster.is_empty() || role.is_empty() {
            return Err(ScheduleError::InvalidId(format!(
                "schedule id '{s}' did not specify team, roster, and role"
            )));
        }
        Ok(ScheduleId {
            team: team.to_string(),
            roster: roster.to_string(),
            role: role.to_string(),
        })
    }
}
