//! Payload types of the on-call scheduling API.
//!
//! These mirror the JSON the service sends and accepts. Nothing here talks
//! to the service; the resource modules ([`crate::team`], [`crate::roster`],
//! [`crate::schedule`]) convert to and from these types.

use serde::{Deserialize, Serialize};

/// A person as the API references them (admins, roster members).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// Body sent when creating or updating a team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub scheduling_timezone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub slack_channel: String,
    #[serde(default)]
    pub iris_plan: String,
}

/// A team as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub scheduling_timezone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub slack_channel: String,
    #[serde(default)]
    pub iris_plan: String,
    #[serde(default)]
    pub admins: Vec<User>,
}

/// A roster as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub users: Vec<User>,
}

/// One recurring window of a schedule, in seconds relative to Sunday 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub start: u64,
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleScheduler {
    pub name: String,
}

/// A roster schedule: which role is on call during which weekly windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub role: String,
    pub team: String,
    pub roster: String,
    pub auto_populate_threshold: u32,
    /// 0 for a single fixed rotation, 1 for an explicit list of shifts.
    pub advanced_mode: u8,
    pub events: Vec<ScheduleEvent>,
    pub scheduler: ScheduleScheduler,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_json_shape() {
        let schedule = Schedule {
            role: "primary".to_string(),
            team: "sre".to_string(),
            roster: "rotation".to_string(),
            auto_populate_threshold: 21,
            advanced_mode: 0,
            events: vec![ScheduleEvent {
                start: 172_680,
                duration: 604_800,
            }],
            scheduler: ScheduleScheduler {
                name: "default".to_string(),
            },
        };

        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["events"][0]["start"], 172_680);
        assert_eq!(json["scheduler"]["name"], "default");
        assert_eq!(json["auto_populate_threshold"], 21);
    }

    #[test]
    fn test_team_tolerates_missing_optional_fields() {
        let team: Team =
            serde_json::from_str(r#"{"name":"sre","scheduling_timezone":"UTC"}"#).unwrap();
        assert_eq!(team.name, "sre");
        assert!(team.admins.is_empty());
        assert!(team.email.is_empty());
    }
}
