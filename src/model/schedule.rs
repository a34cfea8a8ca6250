use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    #[serde(default, deserialize_with = "crate::model::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub participants: Vec<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub creator_id: Option<String>,
}

impl ScheduleEvent {
    pub fn start_at(&self) -> Option<DateTime<Utc>> {
        crate::model::parse_timestamp(&self.start)
    }

    /// End time, or the start time when the end is missing or unparseable.
    pub fn end_at(&self) -> Option<DateTime<Utc>> {
        self.end
            .as_deref()
            .and_then(crate::model::parse_timestamp)
            .or_else(|| self.start_at())
    }

    pub fn involves_any(&self, members: &[String]) -> bool {
        self.participants.iter().any(|p| members.contains(p))
    }
}
