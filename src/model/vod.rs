use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vod {
    #[serde(default, deserialize_with = "crate::model::opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub tags: Vec<String>,
}

impl Vod {
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_deref().and_then(crate::model::parse_timestamp)
    }

    /// Case-insensitive substring match against the title or the space-joined tags.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&q) || self.tags.join(" ").to_lowercase().contains(&q)
    }
}
