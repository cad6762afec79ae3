//! Roster resource: a named group of people within a team.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::ids::RosterId;
use crate::model::Roster;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSpec {
    pub team: String,
    /// Defaults to the team name when left empty.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub members: BTreeSet<String>,
}

impl RosterSpec {
    /// The roster's `team/roster` key.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidConfig`] if `team` is empty.
    pub fn id(&self) -> Result<RosterId, ScheduleError> {
        if self.team.is_empty() {
            return Err(ScheduleError::InvalidConfig(
                "you must specify a non-empty team".to_string(),
            ));
        }
        let roster = if self.name.is_empty() {
            &self.team
        } else {
            &self.name
        };
        let id = RosterId::new(self.team.clone(), roster.clone());
        trace!(roster = %id, "resolved roster id");
        Ok(id)
    }

    /// Read a roster back from the API. The team comes from the resource id
    /// since the roster payload does not carry it.
    pub fn from_roster(team: &str, roster: &Roster) -> Self {
        debug!(team, roster = %roster.name, members = roster.users.len(), "reading roster");
        RosterSpec {
            team: team.to_string(),
            name: roster.name.clone(),
            members: roster.users.iter().map(|u| u.name.clone()).collect(),
        }
    }
}
